//! Exact colour frequency tables.
//!
//! Whole images and rectangular selections go through the same tally; the
//! whole image is simply the region `{0, 0, width, height}`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::Result;
use crate::types::{Colour, ColourEntry, ColourKey, ColourTable, Region};

use super::quantize::quantize_colour;
use super::source::{region_pixels, PixelSource};

/// Builds exhaustive, count-sorted colour tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram {
    step: u32,
}

impl Default for Histogram {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl Histogram {
    /// A histogram that snaps channels to multiples of `step` (0 acts as 1).
    pub fn new(step: u32) -> Self {
        Self { step: step.max(1) }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Tally every pixel of `source`.
    pub fn full<S: PixelSource + ?Sized>(&self, source: &S) -> ColourTable {
        self.tally(source, source.full_region())
    }

    /// Tally a selection of `source`.
    ///
    /// Selections narrower or shorter than two pixels fail with
    /// [`InvalidRegion`](crate::error::SwatchError::InvalidRegion), which
    /// callers should report apart from an empty table.
    pub fn region<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
    ) -> Result<ColourTable> {
        region.validate()?;
        region.check_bounds(source.width(), source.height())?;

        Ok(self.tally(source, region))
    }

    /// `total` is the region area, including fully transparent pixels
    /// that contribute to no bucket. Ratios can therefore sum to less than 1.
    fn tally<S: PixelSource + ?Sized>(&self, source: &S, region: Region) -> ColourTable {
        let total = region.area();

        // Key -> position in `buckets`, which keeps discovery order for ties.
        let mut index: HashMap<ColourKey, usize> = HashMap::new();
        let mut buckets: Vec<(ColourKey, u64)> = Vec::new();

        for [r, g, b, a] in region_pixels(source, region) {
            if a == 0 {
                continue;
            }

            let key = quantize_colour(Colour::rgb(r, g, b), self.step).key();
            match index.entry(key) {
                Entry::Occupied(slot) => buckets[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    slot.insert(buckets.len());
                    buckets.push((key, 1));
                }
            }
        }

        let entries = buckets
            .into_iter()
            .map(|(key, count)| ColourEntry::new(Colour::from(key), count, total))
            .collect();

        ColourTable::from_discovered(total, entries)
    }
}

/// Histogram of `region` (or the whole source) at the given step.
pub fn build_histogram<S: PixelSource + ?Sized>(
    source: &S,
    region: Option<Region>,
    step: u32,
) -> Result<ColourTable> {
    let histogram = Histogram::new(step);
    match region {
        Some(region) => histogram.region(source, region),
        None => Ok(histogram.full(source)),
    }
}
