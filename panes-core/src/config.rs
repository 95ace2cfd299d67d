//! Window and demo settings. Every section may be omitted from a config file;
//! missing values fall back to the defaults below.

use crate::PanesError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Panes".to_string(),
            width: 600.0,
            height: 480.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollableConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Row count of each scrollable list, left to right.
    pub counts: Vec<usize>,
}

impl Default for ScrollableConfig {
    fn default() -> Self {
        Self {
            title: "Scrollable Widgets".to_string(),
            width: 600.0,
            height: 480.0,
            counts: vec![50, 100],
        }
    }
}

impl ScrollableConfig {
    pub fn window(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: "Embedded Figure".to_string(),
            width: 600.0,
            height: 400.0,
        }
    }
}

impl FigureConfig {
    pub fn window(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub scrollable: ScrollableConfig,
    pub figure: FigureConfig,
}

impl DemoConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, PanesError> {
        Ok(toml::from_str(data)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PanesError> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.scrollable.counts, vec![50, 100]);
        assert_eq!(config.figure.window().height, 400.0);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            [scrollable]
            counts = [3]

            [figure]
            width = 1024.0
            "#,
        )
        .unwrap();
        assert_eq!(config.scrollable.counts, vec![3]);
        assert_eq!(config.scrollable.title, "Scrollable Widgets");
        assert_eq!(config.figure.width, 1024.0);
        assert_eq!(config.figure.height, 400.0);
        assert_eq!(config.figure.title, "Embedded Figure");
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = DemoConfig::from_toml_str("[scrollable]\ncounts = \"many\"").unwrap_err();
        assert!(matches!(err, PanesError::Config(_)));
    }
}
