//! Project configuration (`swatch.yaml`).
//!
//! Holds default analysis parameters. Command-line flags override values
//! from the file, which override the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{DEFAULT_ITERATIONS, DEFAULT_K, DEFAULT_STRIDE};
use crate::error::{Result, SwatchError};
use crate::loader::DEFAULT_MAX_DIM;

/// File name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// Default number of rows shown in terminal output.
pub const DEFAULT_TOP: usize = 100;

/// Analysis defaults loaded from `swatch.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Histogram channel quantization step.
    pub step: u32,

    /// Rows shown in terminal output. Exports always contain every row.
    pub top: usize,

    /// Palette size for k-means.
    pub k: usize,

    /// Sampling grid spacing for k-means.
    pub stride: u32,

    /// Lloyd iterations for k-means.
    pub iterations: u32,

    /// Longer-side bound applied when loading images (0 disables it).
    pub max_dim: u32,

    /// Fixed k-means seed; random when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 1,
            top: DEFAULT_TOP,
            k: DEFAULT_K,
            stride: DEFAULT_STRIDE,
            iterations: DEFAULT_ITERATIONS,
            max_dim: DEFAULT_MAX_DIM,
            seed: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // A document with no mappings is not a map to serde_yaml.
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| SwatchError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `swatch.yaml` in `dir` if present,
    /// else the defaults. Returns the path that was read, if any.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Ok((Self::load(&candidate)?, Some(candidate)));
        }

        Ok((Self::default(), None))
    }

    /// Reject zero for parameters that must be at least 1.
    pub fn validate(&self) -> Result<()> {
        check_positive("step", self.step as u64)?;
        check_positive("k", self.k as u64)?;
        check_positive("stride", self.stride as u64)?;
        check_positive("iterations", self.iterations as u64)?;
        Ok(())
    }

    /// The commented starter file written by `swatch init`.
    pub fn template() -> String {
        let d = Self::default();
        format!(
            "# swatch analysis defaults; command-line flags take precedence.\n\
             \n\
             # Histogram channel step (1 = exact colours)\n\
             step: {}\n\
             # Rows shown in terminal output\n\
             top: {}\n\
             \n\
             # k-means palette size, sampling stride and iteration count\n\
             k: {}\n\
             stride: {}\n\
             iterations: {}\n\
             \n\
             # Shrink images whose longer side exceeds this (0 = never)\n\
             max_dim: {}\n\
             \n\
             # Fix the k-means seed for repeatable palettes\n\
             # seed: 42\n",
            d.step, d.top, d.k, d.stride, d.iterations, d.max_dim
        )
    }
}

/// Fail with a config error when `value` is 0.
pub fn check_positive(name: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(SwatchError::Config {
            message: format!("{} must be at least 1", name),
            help: Some(format!("Set {} to a positive integer", name)),
        });
    }
    Ok(())
}
