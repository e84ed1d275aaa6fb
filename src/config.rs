//! Serializable configuration.
//!
//! Only the plain-data options live here; the viewport handle and callbacks
//! are set on [`ResponsiveOptions`](crate::ResponsiveOptions).
//!
//! ```json
//! {
//!   "breakpoints": { "mobile": 600, "desktop": { "value": 1200, "ignoreScrollbar": true } },
//!   "defaultWidth": 1280,
//!   "name": "viewport"
//! }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoints;
use crate::context::DEFAULT_NAME;

/// Width used when there is no viewport to measure.
pub const DEFAULT_WIDTH: f64 = 1024.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("invalid responsive config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default width must be a finite number, got {0}")]
    InvalidDefaultWidth(f64),
    #[error("breakpoint `{key}` does not have a finite value")]
    NonFiniteBreakpoint { key: String },
    #[error("the published name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ResponsiveConfig {
    pub breakpoints: Breakpoints,
    pub default_width: f64,
    pub name: String,
    pub respect_scrollbar_width: bool,
    /// `None` defers to the viewport's own marker.
    pub server_rendered: Option<bool>,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::new(),
            default_width: DEFAULT_WIDTH,
            name: DEFAULT_NAME.to_string(),
            respect_scrollbar_width: true,
            server_rendered: None,
        }
    }
}

impl ResponsiveConfig {
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ResponsiveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_width.is_finite() {
            return Err(ConfigError::InvalidDefaultWidth(self.default_width));
        }
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if let Some((key, _)) = self
            .breakpoints
            .iter()
            .find(|(_, breakpoint)| !breakpoint.value().is_finite())
        {
            return Err(ConfigError::NonFiniteBreakpoint { key: key.clone() });
        }
        Ok(())
    }
}
