// File: crates/clip-core/src/config.rs
// Summary: Demo configuration (window size, title, clip window, theme) loaded from JSON.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::ClipRectangle;
use crate::session::ClipSession;
use crate::types::{HEIGHT, TITLE, WIDTH};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,
    pub clip: ClipRectangle,
    /// Renderer theme name; unknown names fall back to the classic look.
    pub theme: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_width: WIDTH,
            window_height: HEIGHT,
            title: TITLE.to_string(),
            clip: ClipRectangle::default(),
            theme: "classic".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let cfg = Self::from_json_str(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The clip rectangle validates itself on deserialization; only the window is checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    pub fn session(&self) -> ClipSession {
        ClipSession::new(self.clip, self.window_height)
    }
}
