//! Runtime configuration, read from an optional JSON block in the page.

use crate::constants::{DEFAULT_POINT_COUNT, DEFAULT_PROCESSING_DELAY_MS, TOAST_LIFETIME_MS};
use crate::inference::{find_class, DEFAULT_CLASS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown default class `{0}`")]
    UnknownClass(String),
    #[error("point_count must be positive")]
    EmptyCloud,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Inference route, relative or absolute.
    pub endpoint: String,
    pub point_count: usize,
    pub processing_delay_ms: u32,
    pub toast_lifetime_ms: u32,
    pub default_class: String,
    /// Fixed seed for reproducible clouds and hero layout.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/infer".to_string(),
            point_count: DEFAULT_POINT_COUNT,
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            toast_lifetime_ms: TOAST_LIFETIME_MS,
            default_class: DEFAULT_CLASS.to_string(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.point_count == 0 {
            return Err(ConfigError::EmptyCloud);
        }
        if find_class(&self.default_class).is_none() {
            return Err(ConfigError::UnknownClass(self.default_class.clone()));
        }
        Ok(())
    }

    /// Like [`AppConfig::from_json`] but never fails; problems are logged.
    pub fn from_json_or_default(text: &str) -> Self {
        match Self::from_json(text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("[config] {}; using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_block_keeps_other_defaults() {
        let cfg = AppConfig::from_json(r#"{"point_count": 1200, "seed": 7}"#).unwrap();
        assert_eq!(cfg.point_count, 1200);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.endpoint, "/api/infer");
        assert_eq!(cfg.default_class, "cable_gland");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn rejects_unknown_class_and_zero_points() {
        assert!(matches!(
            AppConfig::from_json(r#"{"default_class": "teapot"}"#),
            Err(ConfigError::UnknownClass(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"point_count": 0}"#),
            Err(ConfigError::EmptyCloud)
        ));
    }

    #[test]
    fn malformed_falls_back() {
        assert_eq!(AppConfig::from_json_or_default("{nope"), AppConfig::default());
    }
}
