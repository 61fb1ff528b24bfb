use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLIENT_ID: &str = "default";
pub const DEFAULT_METHOD: &str = "naive-bayes-tfidf";
pub const DEFAULT_TRAINING_PATH: &str = "train.csv";
pub const DEFAULT_LIBRARY_PATH: &str = "lib.csv";

pub const ENV_CLIENT_ID: &str = "CLASSIFY_CLIENT_ID";
pub const ENV_METHOD: &str = "CLASSIFY_METHOD";
pub const ENV_TRAINING_PATH: &str = "CLASSIFY_TRAINING_PATH";
pub const ENV_LIBRARY_PATH: &str = "CLASSIFY_LIBRARY_PATH";

/// Where a client gets its identity, method and data from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    pub method: String,
    pub training_path: PathBuf,
    /// `None` runs without a library.
    pub library_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            method: DEFAULT_METHOD.to_string(),
            training_path: PathBuf::from(DEFAULT_TRAINING_PATH),
            library_path: Some(PathBuf::from(DEFAULT_LIBRARY_PATH)),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `CLASSIFY_*` environment variables.
    ///
    /// An empty `CLASSIFY_LIBRARY_PATH` disables the library.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(client_id) = lookup(ENV_CLIENT_ID) {
            config.client_id = client_id;
        }
        if let Some(method) = lookup(ENV_METHOD) {
            config.method = method;
        }
        if let Some(path) = lookup(ENV_TRAINING_PATH) {
            config.training_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_LIBRARY_PATH) {
            config.library_path = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.method, "naive-bayes-tfidf");
        assert_eq!(config.training_path, PathBuf::from("train.csv"));
        assert_eq!(config.library_path, Some(PathBuf::from("lib.csv")));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_CLIENT_ID, "shop"),
            (ENV_TRAINING_PATH, "/data/alcohol.csv"),
            (ENV_LIBRARY_PATH, ""),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.client_id, "shop");
        assert_eq!(config.method, DEFAULT_METHOD);
        assert_eq!(config.training_path, PathBuf::from("/data/alcohol.csv"));
        assert_eq!(config.library_path, None);
    }
}
