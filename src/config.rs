use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the chart is written into.
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Vertical gap between a max-value label and its point, as a fraction
    /// of the visible range.
    pub label_offset_fraction: f64,
    /// Labels that would end above `upper - clearance * range` go below their point.
    pub top_clearance_fraction: f64,
    /// Distinct curve colours before the palette cycles.
    pub palette_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            width: 1600,
            height: 800,
            label_offset_fraction: 0.08,
            top_clearance_fraction: 0.25,
            palette_size: 8,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= self.height {
            return Err(ConfigError::Invalid(format!(
                "page must be landscape, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..1.0).contains(&self.label_offset_fraction) {
            return Err(ConfigError::Invalid(format!(
                "label_offset_fraction must be in [0, 1), got {}",
                self.label_offset_fraction
            )));
        }
        if !(0.0..1.0).contains(&self.top_clearance_fraction) {
            return Err(ConfigError::Invalid(format!(
                "top_clearance_fraction must be in [0, 1), got {}",
                self.top_clearance_fraction
            )));
        }
        if self.palette_size == 0 {
            return Err(ConfigError::Invalid("palette_size must be at least 1".into()));
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Loads the JSON config at `path`; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(parse_config("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let cfg = parse_config(r#"{ "output_dir": "charts", "width": 2000 }"#).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("charts"));
        assert_eq!(cfg.width, 2000);
        assert_eq!(cfg.height, 800);
        assert_eq!(cfg.label_offset_fraction, 0.08);
    }

    #[test]
    fn portrait_page_is_rejected() {
        let err = parse_config(r#"{ "width": 600, "height": 800 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_palette_is_rejected() {
        let err = parse_config(r#"{ "palette_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_config("{ width: 1 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("mr_classes_no_such_config.json");
        assert_eq!(load_config(&path).unwrap(), AppConfig::default());
    }
}
