use std::path::Path;

use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::config::Config;
use swatch::output::{display_path, Printer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::with_verbosity(cli.verbosity());

    let (config, config_path) = Config::resolve(cli.config.as_deref(), Path::new("."))?;
    if let Some(path) = &config_path {
        printer.verbose("Config", &display_path(path));
    }

    match cli.command {
        Commands::Colors(args) => {
            swatch::cli::colors::run(args, &config, &printer)?;
        }
        Commands::Palette(args) => {
            swatch::cli::palette::run(args, &config, &printer)?;
        }
        Commands::Simulate(args) => swatch::cli::simulate::run(args, &config, &printer)?,
        Commands::Init(args) => swatch::cli::init::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
