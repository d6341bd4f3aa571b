pub mod colors;
pub mod completions;
pub mod init;
pub mod palette;
pub mod simulate;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use image::RgbaImage;

use crate::config::Config;
use crate::cvd::Deficiency;
use crate::error::{Result, SwatchError};
use crate::export::{self, ExportFormat};
use crate::loader::{crop, downscale, load_rgba};
use crate::output::{display_path, Printer, Verbosity};
use crate::types::{ColourTable, Region};

/// swatch - Colour composition and palette extraction for images
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./swatch.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print extra detail about each step
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and the table itself
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count every colour in an image or a region of it
    Colors(colors::ColorsArgs),

    /// Extract a reduced palette with k-means
    Palette(palette::PaletteArgs),

    /// Write a colour-vision-deficiency simulation of an image
    Simulate(simulate::SimulateArgs),

    /// Write a starter swatch.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Image input options shared by the analysis commands.
#[derive(Args, Debug, Clone)]
pub struct ImageArgs {
    /// Image file to analyse
    #[arg(required = true)]
    pub file: PathBuf,

    /// Simulate a colour-vision deficiency before analysing
    #[arg(long, value_enum)]
    pub cvd: Option<Deficiency>,

    /// Shrink the image so its longer side is at most this (0 = never)
    #[arg(long)]
    pub max_dim: Option<u32>,
}

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable rows
    Text,
    Csv,
    Gpl,
    Json,
}

impl OutputFormat {
    fn export(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Csv => Some(ExportFormat::Csv),
            OutputFormat::Gpl => Some(ExportFormat::Gpl),
            OutputFormat::Json => Some(ExportFormat::Json),
        }
    }
}

/// Output options shared by the analysis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write the full table to this file (.csv, .gpl or .json), or into
    /// this directory under a default name
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format (default: text on stdout, or from the file extension)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Palette name used in GPL output
    #[arg(long)]
    pub name: Option<String>,
}

/// Load the image named by `args`, cropped to `region`, fitted and
/// optionally simulated.
///
/// `region` is in the file's own pixel coordinates; the crop happens before
/// the image is shrunk to `max_dim`.
pub(crate) fn prepare_image(
    args: &ImageArgs,
    region: Option<Region>,
    config: &Config,
    printer: &Printer,
) -> Result<RgbaImage> {
    let display = display_path(&args.file);
    printer.status("Loading", &display);

    let mut img = load_rgba(&args.file)?;
    if let Some(region) = region {
        printer.verbose("Region", &format!("{} of {}x{}", region, img.width(), img.height()));
        img = crop(&img, region)?;
    }

    let max_dim = args.max_dim.unwrap_or(config.max_dim);
    let img = downscale(img, max_dim);
    printer.verbose("Size", &format!("{}x{} (max {})", img.width(), img.height(), max_dim));

    Ok(match args.cvd {
        Some(deficiency) => {
            printer.info("Simulating", &deficiency.to_string());
            deficiency.simulate(&img)
        }
        None => img,
    })
}

/// Print or write `table` according to `args`.
///
/// `default_file` names the file written when `--output` is a directory;
/// `default_name` labels GPL output when `--name` is absent. Text output on
/// stdout shows at most `top` rows; every other format carries the full table.
pub(crate) fn emit_table(
    table: &ColourTable,
    args: &OutputArgs,
    default_file: &str,
    default_name: &str,
    top: usize,
    printer: &Printer,
) -> Result<()> {
    let name = args.name.as_deref().unwrap_or(default_name);

    let Some(output) = &args.output else {
        match args.format.unwrap_or(OutputFormat::Text).export() {
            Some(format) => println!("{}", export::render(table, format, name)?),
            None => printer.print_rows(table.top(top)),
        }
        return Ok(());
    };

    let path = if output.is_dir() {
        output.join(default_file)
    } else {
        output.clone()
    };

    let format = resolve_file_format(&path, args.format)?;
    export::write_table(&path, table, format, name)?;
    printer.success("Exported", &format!("{} ({})", display_path(&path), format));

    Ok(())
}

/// Pick an export format for `path`: explicit flag first, then extension.
fn resolve_file_format(path: &Path, flag: Option<OutputFormat>) -> Result<ExportFormat> {
    if let Some(flag) = flag {
        return flag.export().ok_or_else(|| SwatchError::Config {
            message: "Text output cannot be written to a file".to_string(),
            help: Some("Use --format csv, gpl or json with --output".to_string()),
        });
    }

    ExportFormat::from_path(path).ok_or_else(|| SwatchError::Config {
        message: format!("Cannot infer export format for {}", display_path(path)),
        help: Some("Use a .csv, .gpl or .json extension, or pass --format".to_string()),
    })
}
