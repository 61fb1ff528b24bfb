//! A small binary text classifier for short strings such as product titles.
//!
//! Text is normalized to lowercase alphabetic tokens, passed through a canonical
//! token library that merges variants and drops noise words, and scored by a
//! naive Bayes model with TF-IDF weighted term frequencies. The same sanitization
//! runs for training and for every query.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use classify::{Client, Label};
//!
//! let client = Client::builder()
//!     .with_client_id("alcohol")
//!     .with_method("naive-bayes-tfidf")
//!     .add_example("prost beer 100ml", Label::Positive)
//!     .add_example("jaket hoodie sweater", Label::Negative)
//!     .add_library_entry("beer", "beer")
//!     .add_library_entry("prost", "-")
//!     .build()?;
//!
//! let result = client.classify("prost beer 100ml");
//! println!("alcohol: {} ({:.3})", result.verdict, result.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Loading from CSV
//!
//! Training files hold `text,label` rows where the label is `1` or `-1`; library
//! files hold `token,canonical` rows where `-` suppresses the token.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use classify::Client;
//!
//! let client = Client::builder()
//!     .with_client_id("alcohol")
//!     .with_method("naive-bayes-tfidf")
//!     .with_training_file("train.csv")
//!     .with_library_file("lib.csv")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod data_source;

pub use classifier::{
    Canonical, Classification, ClassifyError, Client, ClientBuilder, ClientInfo, Label,
    LabeledExample, Library, Method, NaiveBayesTfIdf, Normalizer, Sanitizer, Scores, TextModel,
};
pub use config::ClientConfig;
pub use data_source::{ChainedSource, CsvSource, DataSource, DataSourceError, MemorySource};

pub fn init_logger() {
    env_logger::init();
}
