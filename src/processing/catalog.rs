//! Career catalog with precomputed career vectors

use crate::error::{CareerMatcherError, Result};
use crate::processing::career_vector::{CareerVector, CareerVectorizer};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

const BUILTIN_CATALOG: &str = include_str!("../../catalog/careers.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required_education: Vec<String>,
    pub required_skills: Vec<String>,
    /// RIASEC letter codes (or dimension names)
    pub personality_fit: Vec<String>,
    #[serde(default)]
    pub salary_band: String,
    #[serde(default)]
    pub demand: String,
    #[serde(default)]
    pub growth: String,
    pub locations: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_environment: Option<String>,
}

/// Validated, read-only set of careers. Vectors are computed once here and
/// shared by every ranking call.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
    vectors: Vec<CareerVector>,
    index: HashMap<String, usize>,
}

impl CareerCatalog {
    pub fn from_records(records: Vec<CareerRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(CareerMatcherError::InvalidCatalog(
                "Catalog contains no careers".to_string(),
            ));
        }

        let vectorizer = CareerVectorizer::new();
        let mut vectors = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CareerMatcherError::InvalidCatalog(format!(
                    "Career at position {} has no id",
                    position
                )));
            }
            if record.title.trim().is_empty() {
                return Err(CareerMatcherError::InvalidCatalog(format!(
                    "{}: missing title",
                    record.id
                )));
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(CareerMatcherError::InvalidCatalog(format!(
                    "Duplicate career id: {}",
                    record.id
                )));
            }

            vectors.push(vectorizer.vectorize(record)?);
            debug!("Vectorized career: {}", record.id);
        }

        info!("Loaded career catalog with {} careers", records.len());
        Ok(Self { records, vectors, index })
    }

    /// Accepts either a bare list of careers or an object with a `careers` list.
    pub fn from_value(value: Value) -> Result<Self> {
        let list = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => map.remove("careers").ok_or_else(|| {
                CareerMatcherError::InvalidCatalog("Expected a 'careers' list".to_string())
            })?,
            _ => {
                return Err(CareerMatcherError::InvalidCatalog(
                    "Catalog must be a list of careers".to_string(),
                ))
            }
        };

        let records: Vec<CareerRecord> = serde_json::from_value(list)
            .map_err(|e| CareerMatcherError::InvalidCatalog(e.to_string()))?;
        Self::from_records(records)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        let value: Value = serde_json::from_str(BUILTIN_CATALOG)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&CareerRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn vector(&self, id: &str) -> Option<&CareerVector> {
        self.index.get(id).map(|&i| &self.vectors[i])
    }

    /// Records paired with their cached vectors, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&CareerRecord, &CareerVector)> {
        self.records.iter().zip(self.vectors.iter())
    }
}
