//! Configuration system
//!
//! Settings are plain serde structs loaded from `.toml` or `.ron` files;
//! the format follows the file extension.

pub use serde::{Deserialize, Serialize};

use crate::physics::collision_layers::LayerFilter;
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = match Format::from_path(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
        };
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Collision detection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// How layer and match masks combine
    pub layer_filter: LayerFilter,

    /// Fill in contact details for circle pairs
    pub compute_contacts: bool,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            layer_filter: LayerFilter::Either,
            compute_contacts: true,
        }
    }
}

impl Config for SpatialConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpatialConfig::default();
        assert_eq!(config.layer_filter, LayerFilter::Either);
        assert!(config.compute_contacts);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spatial.toml");
        let config = SpatialConfig {
            layer_filter: LayerFilter::Mutual,
            compute_contacts: false,
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(SpatialConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spatial.ron");
        let config = SpatialConfig {
            layer_filter: LayerFilter::Directed,
            ..SpatialConfig::default()
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(SpatialConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "layer_filter = \"Directed\"\n").unwrap();
        let config = SpatialConfig::load_from_file(&path).unwrap();
        assert_eq!(config.layer_filter, LayerFilter::Directed);
        assert!(config.compute_contacts);
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("spatial.json");
        assert!(matches!(
            SpatialConfig::default().save_to_file(&json),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        let broken = dir.path().join("broken.ron");
        std::fs::write(&broken, "(layer_filter: Sideways)").unwrap();
        assert!(matches!(SpatialConfig::load_from_file(&broken), Err(ConfigError::Parse(_))));

        let absent = dir.path().join("absent.toml");
        assert!(matches!(SpatialConfig::load_from_file(&absent), Err(ConfigError::Io(_))));
    }
}
