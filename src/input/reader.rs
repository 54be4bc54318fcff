//! Structured document readers

use crate::error::{CareerMatcherError, Result};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Reads a file into a format-neutral JSON value.
pub trait DocumentReader {
    fn read(&self, path: &Path) -> impl std::future::Future<Output = Result<Value>> + Send;
}

pub struct JsonReader;

impl DocumentReader for JsonReader {
    async fn read(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            CareerMatcherError::InvalidInput(format!("Malformed JSON in '{}': {}", path.display(), e))
        })
    }
}

pub struct TomlReader;

impl DocumentReader for TomlReader {
    async fn read(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path).await?;
        toml::from_str(&content).map_err(|e| {
            CareerMatcherError::InvalidInput(format!("Malformed TOML in '{}': {}", path.display(), e))
        })
    }
}
