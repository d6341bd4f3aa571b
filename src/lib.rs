//! swatch - colour composition analysis for raster images
//!
//! Builds exact colour histograms (optionally step-quantized and restricted
//! to a region) and approximate k-means palettes, and renders either as CSV,
//! GIMP palette or JSON text.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod cvd;
pub mod error;
pub mod export;
pub mod loader;
pub mod output;
pub mod types;

pub use analysis::{
    build_histogram, quantize_channel, Histogram, KMeans, PixelBuffer, PixelSource, RandomSampler,
    SampleRng, SequenceRng,
};
pub use config::Config;
pub use cvd::Deficiency;
pub use error::{Result, SwatchError};
pub use export::{to_csv, to_gpl, to_json, ExportFormat};
pub use types::{Colour, ColourEntry, ColourKey, ColourTable, Region};
