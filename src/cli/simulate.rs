//! Simulate command implementation.
//!
//! Writes a copy of an image as seen with a colour-vision deficiency.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::cvd::Deficiency;
use crate::error::Result;
use crate::loader::{load_image, save_image};
use crate::output::{display_path, Printer};

/// Write a colour-vision-deficiency simulation of an image
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Image to transform
    #[arg(required = true)]
    pub input: PathBuf,

    /// Where to write the result (format follows the extension)
    #[arg(required = true)]
    pub output: PathBuf,

    /// Deficiency to simulate
    #[arg(long, value_enum)]
    pub cvd: Deficiency,

    /// Shrink the image so its longer side is at most this (0 = never)
    #[arg(long)]
    pub max_dim: Option<u32>,
}

pub fn run(args: SimulateArgs, config: &Config, printer: &Printer) -> Result<()> {
    printer.status("Loading", &display_path(&args.input));
    let img = load_image(&args.input, args.max_dim.unwrap_or(config.max_dim))?;

    printer.info(
        "Simulating",
        &format!("{} ({}x{})", args.cvd, img.width(), img.height()),
    );
    let simulated = args.cvd.simulate(&img);

    save_image(&simulated, &args.output)?;
    printer.success("Wrote", &display_path(&args.output));

    Ok(())
}
