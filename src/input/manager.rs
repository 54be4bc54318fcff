//! Input manager for loading responses, profiles and catalogs

use crate::assessment::{responses_from_value, Responses};
use crate::error::{CareerMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::reader::{DocumentReader, JsonReader, TomlReader};
use crate::processing::catalog::CareerCatalog;
use crate::processing::profile_vector::StudentProfile;
use log::info;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, Value>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a JSON or TOML document into a JSON value.
    pub async fn read_document(&mut self, path: &Path) -> Result<Value> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached document for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(CareerMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let value = match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Reading JSON file: {}", path.display());
                JsonReader.read(path).await?
            }
            FileType::Toml => {
                info!("Reading TOML file: {}", path.display());
                TomlReader.read(path).await?
            }
            FileType::Unknown => {
                return Err(CareerMatcherError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, value.clone());
        }

        Ok(value)
    }

    pub async fn load_responses(&mut self, path: &Path) -> Result<Responses> {
        let value = self.read_document(path).await?;
        let responses = responses_from_value(&value);
        info!("Loaded {} answers from {}", responses.len(), path.display());
        Ok(responses)
    }

    pub async fn load_profile(&mut self, path: &Path) -> Result<StudentProfile> {
        let value = self.read_document(path).await?;
        Ok(StudentProfile::from_value(&value))
    }

    pub async fn load_catalog(&mut self, path: &Path) -> Result<CareerCatalog> {
        let value = self.read_document(path).await?;
        CareerCatalog::from_value(value)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CareerMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
