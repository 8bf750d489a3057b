//! AutoTech CLI
//!
//! Terminal front end for the AutoTech core library: calculators,
//! maintenance reminders, the vehicle catalog and VIN decoding.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use autotech_core::config::Settings;

/// AutoTech automotive database & maintenance terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/autotech/settings.json)
    #[arg(short, long, global = true, env = "AUTOTECH_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Static compression ratio from cylinder geometry
    Compression {
        /// Displacement in liters
        #[arg(long, default_value = "")]
        displacement: String,
        /// Bore in millimeters
        #[arg(long, default_value = "")]
        bore: String,
        /// Stroke in millimeters
        #[arg(long, default_value = "")]
        stroke: String,
        /// Combustion chamber volume in cc
        #[arg(long, default_value = "")]
        chamber: String,
    },
    /// Fuel efficiency and consumption
    Fuel {
        /// Distance traveled
        #[arg(long, default_value = "")]
        distance: String,
        /// Fuel used
        #[arg(long, default_value = "")]
        fuel: String,
    },
    /// Cost per mile and per kilometer
    Cost {
        /// Total cost
        #[arg(long, default_value = "")]
        total: String,
        /// Distance in miles
        #[arg(long, default_value = "")]
        distance: String,
    },
    /// Tire overall diameter and circumference
    Tire {
        /// Width in millimeters
        #[arg(long, default_value = "")]
        width: String,
        /// Aspect ratio in percent
        #[arg(long, default_value = "")]
        aspect: String,
        /// Wheel diameter in inches
        #[arg(long, default_value = "")]
        wheel: String,
    },
    /// Next oil change and miles left
    Oil {
        /// Mileage at the last change
        #[arg(long, default_value = "")]
        last: String,
        /// Current mileage
        #[arg(long, default_value = "")]
        current: String,
        /// Recommended interval in miles
        #[arg(long, default_value = "")]
        interval: String,
    },
    /// Check the service schedule against the odometer
    Due {
        /// Vehicle model id (defaults to the configured model)
        #[arg(long)]
        model: Option<String>,
        /// Current mileage
        #[arg(long, default_value = "")]
        mileage: String,
    },
    /// Show the due reminder as a banner and wait for it to clear
    Watch {
        /// Vehicle model id (defaults to the configured model)
        #[arg(long)]
        model: Option<String>,
        /// Current mileage
        #[arg(long, default_value = "")]
        mileage: String,
    },
    /// List supported models
    Models,
    /// List or search parts
    Parts {
        #[arg(long)]
        model: Option<String>,
        /// Match on part name or part number
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Service schedule
    Schedule {
        #[arg(long)]
        model: Option<String>,
    },
    /// Diagnostic trouble codes
    Codes {
        #[arg(long)]
        model: Option<String>,
    },
    /// Maintenance log
    Records {
        #[arg(long)]
        model: Option<String>,
    },
    /// Decode a VIN with the NHTSA vPIC API
    Vin {
        /// Vehicle identification number
        vin: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = Settings::load_or_default(args.config.as_deref())
        .context("Failed to load settings")?;
    tracing::debug!(?settings, "settings loaded");
    let terminal = commands::Terminal::new(settings, args.json);

    let output = match args.command {
        Command::Compression {
            displacement,
            bore,
            stroke,
            chamber,
        } => terminal.compression(&displacement, &bore, &stroke, &chamber)?,
        Command::Fuel { distance, fuel } => terminal.fuel(&distance, &fuel)?,
        Command::Cost { total, distance } => terminal.cost(&total, &distance)?,
        Command::Tire {
            width,
            aspect,
            wheel,
        } => terminal.tire(&width, &aspect, &wheel)?,
        Command::Oil {
            last,
            current,
            interval,
        } => terminal.oil(&last, &current, &interval)?,
        Command::Due { model, mileage } => terminal.due(model.as_deref(), &mileage)?,
        Command::Watch { model, mileage } => {
            return terminal.watch(model.as_deref(), &mileage).await;
        }
        Command::Models => terminal.models()?,
        Command::Parts { model, search } => terminal.parts(model.as_deref(), &search)?,
        Command::Schedule { model } => terminal.schedule(model.as_deref())?,
        Command::Codes { model } => terminal.codes(model.as_deref())?,
        Command::Records { model } => terminal.records(model.as_deref())?,
        Command::Vin { vin } => terminal.vin(&vin).await?,
    };

    println!("{output}");
    Ok(())
}
