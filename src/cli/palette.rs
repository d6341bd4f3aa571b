//! Palette command implementation.
//!
//! Reduces an image to `k` representative colours with sampled k-means.

use std::time::Instant;

use clap::Args;

use crate::analysis::{KMeans, RandomSampler};
use crate::config::{check_positive, Config};
use crate::error::Result;
use crate::export::palette_name;
use crate::output::{plural, Printer};
use crate::types::ColourTable;

use super::{emit_table, prepare_image, ImageArgs, OutputArgs};

/// Extract a reduced palette with k-means
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Number of palette colours
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Sample every Nth pixel in each direction
    #[arg(long)]
    pub stride: Option<u32>,

    /// Number of k-means iterations
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Seed for repeatable palettes
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: PaletteArgs, config: &Config, printer: &Printer) -> Result<ColourTable> {
    let kmeans = KMeans::new(
        args.k.unwrap_or(config.k),
        args.stride.unwrap_or(config.stride),
        args.iterations.unwrap_or(config.iterations),
    );
    check_positive("k", kmeans.k as u64)?;
    check_positive("stride", kmeans.stride as u64)?;
    check_positive("iterations", kmeans.iterations as u64)?;
    let seed = args.seed.or(config.seed);

    let img = prepare_image(&args.image, None, config, printer)?;

    let samples = kmeans.sample(&img);
    printer.verbose(
        "Sampled",
        &format!("{} (stride {})", plural(samples.len(), "pixel", "pixels"), kmeans.stride),
    );
    if let Some(seed) = seed {
        printer.verbose("Seed", &seed.to_string());
    }

    let started = Instant::now();
    let mut rng = RandomSampler::from_seed(seed);
    let table = kmeans.cluster(&samples, &mut rng);

    if table.is_empty() {
        printer.warning("Warning", "No opaque pixels sampled; palette is empty");
    } else {
        printer.info(
            "Clustered",
            &format!(
                "{} into {} ({} iterations)",
                plural(samples.len(), "sample", "samples"),
                plural(kmeans.k, "colour", "colours"),
                kmeans.iterations
            ),
        );
    }
    printer.verbose("Elapsed", &format!("{:.1?}", started.elapsed()));

    let name = palette_name(kmeans.k);
    let file = format!("{}.gpl", name);
    emit_table(&table, &args.output, &file, &name, table.len(), printer)?;

    Ok(table)
}
