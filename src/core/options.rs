//! Emitter configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::constants::{DEFAULT_BLANK, DEFAULT_POSITION, DEFAULT_WIDTH_UNIT};

/// Options shared by every emitter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmitterOptions {
    /// Float placement specifier, e.g. "htbp" or "H"
    pub position: String,
    /// Whether to emit `\centering` inside the float
    pub centering: bool,
    /// Placeholder written for missing cell values (default: "~")
    pub blank: String,
    /// Length unit the figure width fraction is multiplied with
    pub width_unit: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION.to_string(),
            centering: true,
            blank: DEFAULT_BLANK.to_string(),
            width_unit: DEFAULT_WIDTH_UNIT.to_string(),
        }
    }
}

impl EmitterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floats pinned in place with the `float` package's `H` specifier
    pub fn pinned() -> Self {
        Self {
            position: "H".to_string(),
            ..Default::default()
        }
    }

    /// Figures sized against `\linewidth`, which follows multi-column layouts
    pub fn line_width() -> Self {
        Self {
            width_unit: "\\linewidth".to_string(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_centering(mut self, centering: bool) -> Self {
        self.centering = centering;
        self
    }

    pub fn with_blank(mut self, blank: impl Into<String>) -> Self {
        self.blank = blank.into();
        self
    }

    pub fn with_width_unit(mut self, unit: impl Into<String>) -> Self {
        self.width_unit = unit.into();
        self
    }

    /// Load options from a TOML document; missing keys keep their defaults
    #[cfg(feature = "data-loading")]
    pub fn from_toml_str(input: &str) -> crate::EmitResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load options from a YAML document; missing keys keep their defaults
    #[cfg(feature = "data-loading")]
    pub fn from_yaml_str(input: &str) -> crate::EmitResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}
