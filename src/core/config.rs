use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokenize_queue_capacity: usize, // Submissions buffered before add_document blocks
    pub index_queue_capacity: usize,    // Tokenized units waiting for the index worker
    pub tokenize_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tokenize_queue_capacity: 16,
            index_queue_capacity: 16,
            tokenize_workers: 5,
        }
    }
}

impl Config {
    pub fn with_tokenize_queue_capacity(mut self, capacity: usize) -> Self {
        self.tokenize_queue_capacity = capacity;
        self
    }

    pub fn with_index_queue_capacity(mut self, capacity: usize) -> Self {
        self.index_queue_capacity = capacity;
        self
    }

    pub fn with_tokenize_workers(mut self, workers: usize) -> Self {
        self.tokenize_workers = workers;
        self
    }

    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokenize_queue_capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "tokenize_queue_capacity must be > 0"));
        }
        if self.index_queue_capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "index_queue_capacity must be > 0"));
        }
        if self.tokenize_workers == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "tokenize_workers must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tokenize_queue_capacity, 16);
        assert_eq!(config.index_queue_capacity, 16);
        assert_eq!(config.tokenize_workers, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{"tokenize_workers": 2}"#).unwrap();
        assert_eq!(config.tokenize_workers, 2);
        assert_eq!(config.tokenize_queue_capacity, 16);
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Config::default().with_tokenize_workers(0).validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);

        let err = Config::from_json(r#"{"index_queue_capacity": 0}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Config::from_json("{not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
