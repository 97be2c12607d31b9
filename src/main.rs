use anyhow::Result;
use clap::{Parser, Subcommand};

use bukkit_version::config::{self, Config};
use bukkit_version::host::{self, EnvHostVersion};
use bukkit_version::{logging, ui, Precision, Version};

#[derive(clap::Parser)]
#[command(
    name = "bukkit-version",
    version,
    about = "Parse, render and compare Bukkit and Minecraft version strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decompose a version string into its components
    Parse {
        version: String,

        #[arg(long, help = "Also accept vanilla strings without -SNAPSHOT")]
        lenient: bool,
    },
    /// Compare two version strings
    Compare {
        left: String,
        right: String,

        #[arg(short, long, help = "Least significant component to compare")]
        precision: Option<Precision>,

        #[arg(long, help = "Also accept vanilla strings without -SNAPSHOT")]
        lenient: bool,
    },
    /// Convert a Bukkit API version string to its vanilla form
    Vanilla { version: String },
    /// Detect the host version from BUKKIT_VERSION / SERVER_VERSION
    Detect,
}

fn main() {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    logging::init(&config.logging.level);

    if let Err(e) = run(args.command, &config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Parse { version, lenient } => {
            let strict = config.parsing.strict && !lenient;
            let parsed = Version::parse(&version, strict)?;
            ui::display_version_details(&parsed);
        }
        Command::Compare {
            left,
            right,
            precision,
            lenient,
        } => {
            let strict = config.parsing.strict && !lenient;
            let precision = precision.unwrap_or(config.comparison.precision);
            let left = Version::parse(&left, strict)?;
            let right = Version::parse(&right, strict)?;
            let result = left.compare(&right, precision)?;
            ui::display_comparison(&left, &right, precision, result);
        }
        Command::Vanilla { version } => {
            println!("{}", host::convert_bukkit_to_vanilla(&version)?);
        }
        Command::Detect => {
            let detection = host::detect_version(&EnvHostVersion)?;
            for warning in &detection.warnings {
                ui::display_detection_warning(warning);
            }
            ui::display_success(&format!(
                "Detected Minecraft {}, implementing Bukkit API {}",
                detection.version.render_plain(),
                detection.version.render_full()
            ));
        }
    }

    Ok(())
}
