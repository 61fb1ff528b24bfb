use std::time::Duration;

mod bayes;
pub mod builder;
mod client;
mod error;
mod library;
mod model;
mod normalizer;
mod sanitizer;
mod utils;

pub use bayes::NaiveBayesTfIdf;
pub use builder::ClientBuilder;
pub use client::{Classification, Client};
pub use error::ClassifyError;
pub use library::{Canonical, Library, MIN_TOKEN_LEN, SUPPRESSION_MARKER};
pub use model::{Label, LabeledExample, Method, Scores, TextModel, TAG_NEGATIVE, TAG_POSITIVE};
pub use normalizer::Normalizer;
pub use sanitizer::Sanitizer;

/// Information about the current state and configuration of a ready client
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Identifier the client was created with
    pub client_id: String,
    /// Resolved classification method
    pub method: Method,
    /// Unique id generated for the fitted model
    pub model_id: String,
    /// Number of entries in the canonical token library
    pub library_size: usize,
    /// Number of distinct positive training texts
    pub positive_examples: usize,
    /// Number of distinct negative training texts
    pub negative_examples: usize,
    /// Distinct tokens the model learned
    pub vocabulary_size: usize,
    /// Time spent loading data and fitting the model
    pub init_elapsed: Duration,
}
