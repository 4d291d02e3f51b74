// File: crates/clip-core/src/error.rs
// Summary: Typed configuration errors. Clipping itself never fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("clip bounds are inverted: ({x_min}, {y_min})-({x_max}, {y_max})")]
    InvertedClipBounds { x_min: i32, y_min: i32, x_max: i32, y_max: i32 },

    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: i32, height: i32 },

    #[error("failed to read config '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
