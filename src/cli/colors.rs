//! Colors command implementation.
//!
//! Builds the exact colour histogram of an image, or of a region of it.

use clap::Args;

use crate::analysis::Histogram;
use crate::config::{check_positive, Config};
use crate::error::Result;
use crate::export::DEFAULT_CSV_NAME;
use crate::output::{plural, Printer};
use crate::types::{ColourTable, Region};

use super::{emit_table, prepare_image, ImageArgs, OutputArgs};

/// Count every colour in an image or a region of it
#[derive(Args, Debug)]
pub struct ColorsArgs {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Snap each channel to the nearest multiple of this step
    #[arg(long)]
    pub step: Option<u32>,

    /// Number of rows to show in text output
    #[arg(long)]
    pub top: Option<usize>,

    /// Only analyse this region, as X,Y,WxH in the file's own pixels
    /// (e.g. 10,10,64x64)
    #[arg(long)]
    pub region: Option<Region>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: ColorsArgs, config: &Config, printer: &Printer) -> Result<ColourTable> {
    let step = args.step.unwrap_or(config.step);
    check_positive("step", step as u64)?;
    let top = args.top.unwrap_or(config.top);

    let img = prepare_image(&args.image, args.region, config, printer)?;
    let table = Histogram::new(step).full(&img);

    let scope = match &args.region {
        Some(region) => format!("{}x{} region", region.w, region.h),
        None => format!("{} pixels", table.total),
    };
    printer.info(
        "Analyzed",
        &format!(
            "{} ({}, step {})",
            scope,
            plural(table.len(), "distinct colour", "distinct colours"),
            step
        ),
    );

    if table.is_empty() {
        printer.warning("Warning", "No opaque pixels found");
    } else if table.len() > top && args.output.output.is_none() {
        printer.verbose("Showing", &format!("top {} of {}", top, table.len()));
    }

    emit_table(&table, &args.output, DEFAULT_CSV_NAME, "colors", top, printer)?;

    Ok(table)
}
