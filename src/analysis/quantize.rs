//! Step quantization of colour channels.

use crate::types::Colour;

/// Snap `v` to the nearest multiple of `step`, clamped to 255.
///
/// Halves round up. The clamp applies only on the high side, so a channel
/// near 255 stays at 255 rather than dropping to the multiple below it
/// (step 100 maps 250 to 300, then to 255).
///
/// A step of 0 or 1 leaves the value unchanged.
#[inline]
pub fn quantize_channel(v: u8, step: u32) -> u8 {
    if step <= 1 {
        return v;
    }

    let step = step as u64;
    let snapped = (2 * v as u64 + step) / (2 * step) * step;
    snapped.min(255) as u8
}

/// Apply [`quantize_channel`] to each channel independently.
#[inline]
pub fn quantize_colour(colour: Colour, step: u32) -> Colour {
    if step <= 1 {
        return colour;
    }

    Colour::rgb(
        quantize_channel(colour.r, step),
        quantize_channel(colour.g, step),
        quantize_channel(colour.b, step),
    )
}
