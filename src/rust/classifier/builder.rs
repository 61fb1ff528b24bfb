use std::path::Path;

use log::{info, warn};

use super::client::Client;
use super::error::ClassifyError;
use super::model::Label;
use crate::config::ClientConfig;
use crate::data_source::{ChainedSource, CsvSource, DataSource, MemorySource};

/// A builder for constructing and initializing a [`Client`] with a fluent interface.
///
/// Training data and library entries can come from any number of sources; they are
/// read in the order they were added, followed by entries added inline with
/// [`add_example`](Self::add_example) and [`add_library_entry`](Self::add_library_entry).
#[derive(Debug, Default)]
pub struct ClientBuilder {
    client_id: String,
    method: String,
    training: Vec<Box<dyn DataSource>>,
    library: Vec<Box<dyn DataSource>>,
    examples: MemorySource,
    library_entries: MemorySource,
}

impl ClientBuilder {
    /// Creates a new empty ClientBuilder instance
    ///
    /// Client id and method must be set before [`build`](Self::build).
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a [`ClientConfig`]: identity, method and CSV file locations.
    ///
    /// # Example
    /// ```
    /// use classify::{ClientBuilder, ClientConfig};
    ///
    /// let config = ClientConfig {
    ///     library_path: None,
    ///     ..ClientConfig::default()
    /// };
    /// let builder = ClientBuilder::from_config(&config);
    /// ```
    pub fn from_config(config: &ClientConfig) -> Self {
        let builder = Self::new()
            .with_client_id(config.client_id.as_str())
            .with_method(config.method.as_str())
            .with_training_file(&config.training_path);
        match &config.library_path {
            Some(path) => builder.with_library_file(path),
            None => builder,
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Sets the classification method by name, e.g. `"naive-bayes-tfidf"`
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adds a two-column CSV file of `text,label` rows
    pub fn with_training_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_training_source(CsvSource::new(path))
    }

    pub fn with_training_source(mut self, source: impl DataSource + 'static) -> Self {
        self.training.push(Box::new(source));
        self
    }

    /// Adds a two-column CSV file of `token,canonical` rows
    pub fn with_library_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_library_source(CsvSource::new(path))
    }

    pub fn with_library_source(mut self, source: impl DataSource + 'static) -> Self {
        self.library.push(Box::new(source));
        self
    }

    pub fn add_example(mut self, text: impl Into<String>, label: Label) -> Self {
        self.examples.push(text, label.tag());
        self
    }

    /// Maps `token` to `canonical`, or suppresses it when `canonical` is `"-"`
    pub fn add_library_entry(mut self, token: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.library_entries.push(token, canonical);
        self
    }

    /// Builds the client and initializes it.
    ///
    /// # Errors
    /// Same as [`Client::init`].
    pub fn build(self) -> Result<Client, ClassifyError> {
        let mut training: Vec<&dyn DataSource> = Vec::new();
        for source in &self.training {
            training.push(&**source);
        }
        if !self.examples.is_empty() {
            training.push(&self.examples);
        }
        let mut library: Vec<&dyn DataSource> = Vec::new();
        for source in &self.library {
            library.push(&**source);
        }
        if !self.library_entries.is_empty() {
            library.push(&self.library_entries);
        }

        let training = ChainedSource::new(training);
        let library = ChainedSource::new(library);
        if training.is_empty() {
            warn!("[{}] No training data configured", self.client_id);
        }
        if library.is_empty() {
            info!("[{}] No library being used", self.client_id);
        }

        let mut client = Client::new(self.client_id.as_str(), self.method.as_str());
        client.init(&training, &library)?;
        Ok(client)
    }
}
