//! Approximate palette reduction by k-means over a sampled grid.
//!
//! Centroids are seeded from random samples and refined for a fixed
//! number of Lloyd iterations. There is no convergence check: every run
//! performs exactly the configured number of passes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Colour, ColourEntry, ColourTable};

use super::source::PixelSource;

/// Default number of palette colours.
pub const DEFAULT_K: usize = 16;
/// Default sampling grid spacing.
pub const DEFAULT_STRIDE: u32 = 5;
/// Default Lloyd iteration count.
pub const DEFAULT_ITERATIONS: u32 = 8;

/// Source of uniformly random sample indices.
///
/// Production code draws from a real generator; tests substitute a fixed
/// sequence to pin the outcome.
pub trait SampleRng {
    /// An index in `0..len`. `len` is never 0.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Adapts any [`rand::Rng`] to [`SampleRng`].
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Seeded from `seed`, or from OS entropy when `None`.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> SampleRng for RandomSampler<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each index is reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            pos: 0,
        }
    }

    /// Number of indices handed out so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl SampleRng for SequenceRng {
    fn next_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            self.pos += 1;
            return 0;
        }
        let i = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        i % len
    }
}

/// k-means palette extraction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeans {
    /// Number of palette colours.
    pub k: usize,
    /// Grid spacing used when sampling the image.
    pub stride: u32,
    /// Lloyd iterations to run.
    pub iterations: u32,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            stride: DEFAULT_STRIDE,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KMeans {
    pub fn new(k: usize, stride: u32, iterations: u32) -> Self {
        Self {
            k,
            stride,
            iterations,
        }
    }

    /// Opaque-enough samples (alpha > 0) on a `stride` grid, row-major.
    pub fn sample<S: PixelSource + ?Sized>(&self, source: &S) -> Vec<Colour> {
        let stride = self.stride.max(1) as usize;
        let mut samples = Vec::new();

        for y in (0..source.height()).step_by(stride) {
            for x in (0..source.width()).step_by(stride) {
                let [r, g, b, a] = source.pixel(x, y);
                if a == 0 {
                    continue;
                }
                samples.push(Colour::rgb(r, g, b));
            }
        }

        samples
    }

    /// Sample `source` and cluster the result.
    pub fn quantize<S, R>(&self, source: &S, rng: &mut R) -> ColourTable
    where
        S: PixelSource + ?Sized,
        R: SampleRng + ?Sized,
    {
        let samples = self.sample(source);
        self.cluster(&samples, rng)
    }

    /// Cluster `samples` into `k` colours.
    ///
    /// Returns an empty table when there are no samples. Otherwise the table
    /// has exactly `k` rows whose counts sum to `samples.len()`. Counts come
    /// from the assignment made in the last pass, before that pass moved the
    /// centroids. At least one pass always runs.
    pub fn cluster<R: SampleRng + ?Sized>(&self, samples: &[Colour], rng: &mut R) -> ColourTable {
        let total = samples.len() as u64;
        if samples.is_empty() || self.k == 0 {
            return ColourTable {
                total,
                entries: Vec::new(),
            };
        }

        // Drawn with replacement; duplicate seeds are left as they are.
        let mut centroids: Vec<Colour> = (0..self.k)
            .map(|_| samples[rng.next_index(samples.len())])
            .collect();
        let mut assignment = vec![0usize; samples.len()];

        for _ in 0..self.iterations.max(1) {
            assign(samples, &centroids, &mut assignment);
            update(samples, &assignment, &mut centroids, rng);
        }

        let mut counts = vec![0u64; self.k];
        for &cluster in &assignment {
            counts[cluster] += 1;
        }

        let entries = centroids
            .iter()
            .zip(counts)
            .map(|(&centroid, count)| ColourEntry::new(centroid, count, total))
            .collect();

        ColourTable::from_discovered(total, entries)
    }
}

/// Index of the nearest centroid; the lowest index wins exact ties.
fn nearest(colour: Colour, centroids: &[Colour]) -> usize {
    let mut best = 0;
    let mut best_dist = u32::MAX;

    for (i, centroid) in centroids.iter().enumerate() {
        let dist = colour.distance_sq(*centroid);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }

    best
}

fn assign(samples: &[Colour], centroids: &[Colour], assignment: &mut [usize]) {
    for (slot, &sample) in assignment.iter_mut().zip(samples) {
        *slot = nearest(sample, centroids);
    }
}

/// Move each centroid to the rounded mean of its members. A centroid with
/// no members is reseeded from a fresh random sample.
fn update<R: SampleRng + ?Sized>(
    samples: &[Colour],
    assignment: &[usize],
    centroids: &mut [Colour],
    rng: &mut R,
) {
    // r, g, b sums and member count per centroid
    let mut sums = vec![[0u64; 4]; centroids.len()];
    for (&cluster, sample) in assignment.iter().zip(samples) {
        let sum = &mut sums[cluster];
        sum[0] += sample.r as u64;
        sum[1] += sample.g as u64;
        sum[2] += sample.b as u64;
        sum[3] += 1;
    }

    for (centroid, [r, g, b, n]) in centroids.iter_mut().zip(sums) {
        *centroid = if n > 0 {
            Colour::rgb(rounded_mean(r, n), rounded_mean(g, n), rounded_mean(b, n))
        } else {
            samples[rng.next_index(samples.len())]
        };
    }
}

/// `sum / n` rounded half up.
fn rounded_mean(sum: u64, n: u64) -> u8 {
    ((2 * sum + n) / (2 * n)) as u8
}
