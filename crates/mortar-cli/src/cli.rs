//! CLI definition using clap

use clap::{Parser, Subcommand};
use mortar_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mortar-calculator")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Cement and sand quantities for room walls")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate every room in a sheet (.csv or .toml)
    Calc {
        /// Path to room sheet
        sheet: PathBuf,
    },

    /// Calculate a single room from flags
    Room {
        /// Room name
        #[arg(long, default_value = "")]
        name: String,

        /// Room size label (not used in the calculation)
        #[arg(long, default_value = "")]
        size: String,

        /// Length L (m)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        length: String,

        /// Width W (m)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        width: String,

        /// Height H (m)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        height: String,

        /// Wall thickness T (m)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        thickness: String,

        /// Cement ratio C
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        cement_ratio: String,

        /// Sand ratio S
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        sand_ratio: String,
    },

    /// Fill the form with commands from a script, or interactively from stdin
    Session {
        /// Script file with one command per line
        script: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the largest accepted room count
        #[arg(long, conflicts_with = "clear_max_rooms")]
        set_max_rooms: Option<usize>,

        /// Remove the room count limit
        #[arg(long)]
        clear_max_rooms: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
