//! Style presets loaded from TOML.
//!
//! ```toml
//! theme = "dark"
//! density = 0.8
//! corner_radius = 16.0
//! shadow_distance = 30.0
//! variant = "blur-only-thin-border"
//! ```
//!
//! Every key is optional; missing keys keep the default style. Values go
//! through the regular setters, so out-of-range numbers are clamped rather
//! than rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{GlassVariant, StyleConfig};
use crate::theme::Theme;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read style preset: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid style preset: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlassConfig {
    pub theme: Option<Theme>,
    pub density: Option<f64>,
    pub corner_radius: Option<f64>,
    pub shadow_distance: Option<f64>,
    pub variant: Option<GlassVariant>,
}

impl GlassConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("loaded glass style preset from {}", path.display());
        Ok(config)
    }

    /// Default style with this preset's values applied.
    pub fn into_style(self) -> StyleConfig {
        let mut style = StyleConfig::default();
        if let Some(variant) = self.variant {
            style.set_variant(variant);
        }
        if let Some(theme) = self.theme {
            style.set_theme(theme);
        }
        if let Some(density) = self.density {
            style.set_density(density);
        }
        if let Some(radius) = self.corner_radius {
            style.set_corner_radius(radius);
        }
        if let Some(distance) = self.shadow_distance {
            style.set_shadow_distance(distance);
        }
        style
    }
}

impl From<&StyleConfig> for GlassConfig {
    fn from(style: &StyleConfig) -> Self {
        Self {
            theme: Some(style.theme()),
            density: Some(style.density()),
            corner_radius: Some(style.corner_radius()),
            shadow_distance: Some(style.shadow_distance()),
            variant: Some(style.variant()),
        }
    }
}
