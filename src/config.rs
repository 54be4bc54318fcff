//! Configuration management for the career matcher

use crate::error::{CareerMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub dynamic_weighting: bool,
    pub skill_boost: f64,
    pub personality_boost: f64,
    pub education_boost: f64,
    pub weights: CategoryWeights,
}

/// Relative weight of each career sub-vector in the weighted cosine.
/// Every position of a sub-vector carries its category's weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub education: f64,
    pub skills: f64,
    pub personality: f64,
    pub industry: f64,
    pub salary: f64,
    pub demand: f64,
    pub location: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub top_n: usize,
    pub skill_gap_limit: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External catalog file (JSON or TOML). The built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            education: 0.15,
            skills: 0.30,
            personality: 0.25,
            industry: 0.10,
            salary: 0.05,
            demand: 0.05,
            location: 0.05,
            growth: 0.05,
        }
    }
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.education
            + self.skills
            + self.personality
            + self.industry
            + self.salary
            + self.demand
            + self.location
            + self.growth
    }

    /// Weights in career sub-vector order.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.education,
            self.skills,
            self.personality,
            self.industry,
            self.salary,
            self.demand,
            self.location,
            self.growth,
        ]
    }

    /// Scale every weight so the categories sum to 1.0
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total <= 0.0 || !total.is_finite() {
            return *self;
        }

        Self {
            education: self.education / total,
            skills: self.skills / total,
            personality: self.personality / total,
            industry: self.industry / total,
            salary: self.salary / total,
            demand: self.demand / total,
            location: self.location / total,
            growth: self.growth / total,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(CareerMatcherError::Configuration(
                "Category weights must be finite and non-negative".to_string(),
            ));
        }
        if self.sum() <= 0.0 {
            return Err(CareerMatcherError::Configuration(
                "Category weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            dynamic_weighting: false,
            skill_boost: 1.5,
            personality_boost: 1.3,
            education_boost: 1.2,
            weights: CategoryWeights::default(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            skill_gap_limit: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            ranking: RankingConfig::default(),
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CareerMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.weights.validate()?;

        let boosts = [
            self.scoring.skill_boost,
            self.scoring.personality_boost,
            self.scoring.education_boost,
        ];
        if boosts.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(CareerMatcherError::Configuration(
                "Dynamic weighting boosts must be finite and positive".to_string(),
            ));
        }

        if self.ranking.top_n == 0 {
            return Err(CareerMatcherError::Configuration(
                "ranking.top_n must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = CategoryWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_normalized_weights() {
        let weights = CategoryWeights {
            education: 2.0,
            skills: 2.0,
            personality: 0.0,
            industry: 0.0,
            salary: 0.0,
            demand: 0.0,
            location: 0.0,
            growth: 0.0,
        };
        let normalized = weights.normalized();
        assert!((normalized.education - 0.5).abs() < 1e-12);
        assert!((normalized.skills - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = Config::default();
        config.scoring.weights.salary = -0.1;
        assert!(matches!(config.validate(), Err(CareerMatcherError::Configuration(_))));
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ranking.top_n = 5;
        config.scoring.dynamic_weighting = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ranking.top_n, 5);
        assert!(loaded.scoring.dynamic_weighting);
        assert_eq!(loaded.scoring.weights, CategoryWeights::default());
        assert_eq!(loaded.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CareerMatcherError::Configuration(_))));
    }
}
