use miette::Diagnostic;
use thiserror::Error;

use crate::types::Region;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(swatch::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(swatch::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Selection too small: {width}x{height}")]
    #[diagnostic(
        code(swatch::region::too_small),
        help("A region must be at least 2x2 pixels")
    )]
    InvalidRegion { width: u32, height: u32 },

    #[error("Region {region} lies outside the {width}x{height} image")]
    #[diagnostic(code(swatch::region::bounds))]
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
