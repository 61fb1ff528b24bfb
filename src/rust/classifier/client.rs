use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::builder::ClientBuilder;
use super::error::ClassifyError;
use super::library::Library;
use super::model::{Label, LabeledExample, Method, TextModel};
use super::sanitizer::Sanitizer;
use super::ClientInfo;
use crate::data_source::DataSource;

/// Result of classifying one text.
///
/// `verdict` is true when the positive class is the most likely one, and `score`
/// is the posterior probability of whichever class won.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: bool,
    pub score: f64,
}

impl Classification {
    /// Returned when no token of the input survives sanitization.
    pub const EMPTY: Self = Self {
        verdict: false,
        score: 0.0,
    };

    /// Returned by a client that is not ready to classify.
    pub const UNUSABLE: Self = Self {
        verdict: false,
        score: -999.0,
    };
}

impl Default for Classification {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Everything a ready client needs to answer queries.
#[derive(Debug)]
struct Engine {
    method: Method,
    model_id: String,
    sanitizer: Sanitizer,
    model: Box<dyn TextModel>,
    positive_examples: usize,
    negative_examples: usize,
    init_elapsed: Duration,
}

impl Engine {
    fn classify(&self, text: &str) -> Classification {
        let tokens = self.sanitizer.sanitize_one(text);
        if tokens.is_empty() {
            return Classification::EMPTY;
        }
        let scores = self.model.score_document(&tokens);
        Classification {
            verdict: scores.winning_label() == Label::Positive,
            score: scores.winning_score(),
        }
    }
}

/// A binary text classifier bound to a client identity and a method.
///
/// A client starts uninitialized; [`Client::init`] loads the library and the
/// training data, fits the model, and makes the client ready. Classification never
/// fails: an unready client answers [`Classification::UNUSABLE`].
///
/// # Thread Safety
///
/// Once initialized a client is only read, so it can be shared across threads
/// behind an `Arc` without locking:
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use classify::{Client, Label};
/// use std::sync::Arc;
/// use std::thread;
///
/// let client = Arc::new(Client::builder()
///     .with_client_id("shop")
///     .with_method("naive-bayes-tfidf")
///     .add_example("bir bintang botol", Label::Positive)
///     .add_example("kaos polos hitam", Label::Negative)
///     .build()?);
///
/// let handles: Vec<_> = (0..3)
///     .map(|_| {
///         let client = Arc::clone(&client);
///         thread::spawn(move || client.classify("bir dingin"))
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap().verdict);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    client_id: String,
    method: String,
    engine: Option<Engine>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Client>();
    }
};

impl Client {
    /// Creates an uninitialized client.
    pub fn new(client_id: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            method: method.into(),
            engine: None,
        }
    }

    /// Creates a ClientBuilder for fluent construction
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Loads the library and training data, then fits the model.
    ///
    /// # Errors
    /// * `Configuration` if the client id or method is empty, or the client is already ready
    /// * `UnsupportedMethod` if the method name is not registered
    /// * `DataSource` if either source fails to load
    ///
    /// On error the client stays uninitialized.
    pub fn init(
        &mut self,
        training: &dyn DataSource,
        library: &dyn DataSource,
    ) -> Result<(), ClassifyError> {
        let start = Instant::now();

        if self.engine.is_some() {
            return Err(ClassifyError::Configuration(format!(
                "client '{}' is already initialized",
                self.client_id
            )));
        }
        if self.client_id.is_empty() || self.method.is_empty() {
            return Err(ClassifyError::Configuration(
                "client ID and method are required".to_string(),
            ));
        }
        let method = Method::from_name(&self.method)?;

        let library = Library::from_source(library)?;
        info!("[{}] Loaded library: {} entries", self.client_id, library.len());

        let examples = LabeledExample::from_pairs(training.load()?);
        debug!(
            "[{}] {} labeled examples from {}",
            self.client_id,
            examples.len(),
            training.name()
        );
        let (positive, negative): (Vec<_>, Vec<_>) = examples
            .into_iter()
            .partition(|example| example.label == Label::Positive);
        let positive: Vec<String> = positive.into_iter().map(|e| e.text).collect();
        let negative: Vec<String> = negative.into_iter().map(|e| e.text).collect();

        // One sanitizer serves both training and every later query.
        let sanitizer = Sanitizer::new(library);
        let mut model = method.create_model();
        model.fit(&[sanitizer.sanitize(&positive)], &[sanitizer.sanitize(&negative)]);
        info!(
            "[{}] Trained {} - positive: {}, negative: {}",
            self.client_id,
            method,
            positive.len(),
            negative.len()
        );

        let init_elapsed = start.elapsed();
        self.engine = Some(Engine {
            method,
            model_id: Uuid::new_v4().to_string(),
            sanitizer,
            model,
            positive_examples: positive.len(),
            negative_examples: negative.len(),
            init_elapsed,
        });
        info!("[{}] Time elapsed on init: {:.2?}", self.client_id, init_elapsed);
        Ok(())
    }

    /// Classifies one text.
    ///
    /// # Example
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use classify::{Classification, Client, Label};
    ///
    /// let client = Client::builder()
    ///     .with_client_id("example")
    ///     .with_method("naive-bayes-tfidf")
    ///     .add_example("prost beer 100ml", Label::Positive)
    ///     .add_example("jaket hoodie sweater", Label::Negative)
    ///     .add_library_entry("prost", "-")
    ///     .build()?;
    ///
    /// assert!(client.classify("cold beer").verdict);
    /// assert_eq!(client.classify("prost!"), Classification::EMPTY);
    /// # Ok(())
    /// # }
    /// ```
    pub fn classify(&self, text: &str) -> Classification {
        match &self.engine {
            Some(engine) => engine.classify(text),
            None => Classification::UNUSABLE,
        }
    }

    pub fn classify_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Classification> {
        texts.iter().map(|text| self.classify(text.as_ref())).collect()
    }

    /// Returns information about a ready client, or `None` before initialization
    pub fn info(&self) -> Option<ClientInfo> {
        self.engine.as_ref().map(|engine| ClientInfo {
            client_id: self.client_id.clone(),
            method: engine.method,
            model_id: engine.model_id.clone(),
            library_size: engine.sanitizer.library().len(),
            positive_examples: engine.positive_examples,
            negative_examples: engine.negative_examples,
            vocabulary_size: engine.model.vocabulary_size(),
            init_elapsed: engine.init_elapsed,
        })
    }
}
