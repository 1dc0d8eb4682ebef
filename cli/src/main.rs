mod config;
mod logging;
mod render;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use numerology_core::{
    build_grid, classify, digits::digits_of, generate_report, GridFlavor, UserInput,
};
use tracing::debug;

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology reports from name, birth date and mobile number", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/numerology/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Full report (usage: report Ravi Kumar dob:15-08-1990 mobile:9876543210 gender:m)
    Report {
        /// Name words plus key:value fields (dob, mobile, gender, time, name)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Only the four core numbers with their working
    Numbers {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Compatibility tier of two numbers
    Compat { a: u32, b: u32 },
    /// Grid analysis of an arbitrary digit string
    Grid {
        digits: String,
        #[arg(long, value_enum, default_value_t = FlavorArg::Loshu)]
        flavor: FlavorArg,
    },
    /// Browse a report in the Terminal User Interface
    Tui {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum FlavorArg {
    Loshu,
    Vedic,
}

impl From<FlavorArg> for GridFlavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Loshu => GridFlavor::LoShu,
            FlavorArg::Vedic => GridFlavor::Vedic,
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    logging::init(&config.log_level);

    let format = cli.format.unwrap_or(config.format);
    debug!(?format, color = config.color, "config loaded");

    match cli.command {
        Commands::Report { args } => {
            let input = UserInput::from_args(&args, config.default_gender)?;
            let report = generate_report(&input);
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Text => render::print_report(&report, config.color),
            }
        }
        Commands::Numbers { args } => {
            let input = UserInput::from_args(&args, config.default_gender)?;
            let report = generate_report(&input);
            match format {
                OutputFormat::Json => print_json(&report.core_numbers)?,
                OutputFormat::Text => render::print_numbers(&report, config.color),
            }
        }
        Commands::Compat { a, b } => {
            let rating = classify(a, b);
            match format {
                OutputFormat::Json => print_json(&rating)?,
                OutputFormat::Text => println!("{} ↔ {}: {} ({})", a, b, rating, rating.description()),
            }
        }
        Commands::Grid { digits, flavor } => {
            let values = digits_of(&digits);
            if values.is_empty() {
                return Err(anyhow!("No digits in '{}'", digits));
            }
            let flavor = GridFlavor::from(flavor);
            let analysis = build_grid(&values, flavor);
            match format {
                OutputFormat::Json => print_json(&analysis)?,
                OutputFormat::Text => render::print_grid(&analysis, flavor, config.color),
            }
        }
        Commands::Tui { args } => {
            let input = UserInput::from_args(&args, config.default_gender)?;
            tui::run(generate_report(&input))?;
        }
    }
    Ok(())
}
