//! Colour analysis over in-memory pixel buffers.
//!
//! Two analysers share the same input abstraction:
//! - [`Histogram`] counts every distinct (optionally step-quantized) colour
//! - [`KMeans`] reduces a sampled image to a small representative palette
//!
//! Both are synchronous and keep no state between calls.

mod histogram;
mod kmeans;
mod quantize;
mod source;

pub use histogram::{build_histogram, Histogram};
pub use kmeans::{
    KMeans, RandomSampler, SampleRng, SequenceRng, DEFAULT_ITERATIONS, DEFAULT_K, DEFAULT_STRIDE,
};
pub use quantize::{quantize_channel, quantize_colour};
pub use source::{region_pixels, PixelBuffer, PixelSource};
