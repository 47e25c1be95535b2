//! Shared configuration for icongen
//!
//! This crate provides the single source of truth for the icon sizes, the
//! output directory, and the file naming convention shared by every icon
//! binary. Nothing here is read from the environment or from files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Icon sizes rendered by every batch, in output order
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directory the icons are written into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Default logging level for the binaries
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// File name for an icon of the given size (`icon<size>.png`)
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Batch configuration: where icons go and which sizes are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Output directory, created if missing
    pub output_dir: PathBuf,
    /// Sizes in render order
    pub sizes: Vec<u32>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

impl BatchConfig {
    /// Create a batch config for an arbitrary directory and size list
    pub fn new(output_dir: impl Into<PathBuf>, sizes: impl Into<Vec<u32>>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sizes: sizes.into(),
        }
    }

    /// Full path of the icon file for `size` inside the output directory
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Logging configuration for the binaries
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
        }
    }
}
