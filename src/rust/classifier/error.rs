use crate::data_source::DataSourceError;

/// Represents the different types of errors that can occur while setting up a client.
///
/// Classification itself never fails; see [`Classification`](super::Classification)
/// for the sentinel values returned instead.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Required client identity or method is missing, or the client was already initialized
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The requested classification method is not registered
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
    /// Training or library data could not be loaded
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),
}
