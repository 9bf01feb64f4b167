//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{Dv01Args, PaymentsArgs, VarArgs, WeightsArgs};

/// Bondrisk - fixed income portfolio risk from the command line
#[derive(Parser)]
#[command(name = "bondrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Risk configuration file (TOML)
    #[arg(long, global = true, env = "BONDRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Count the coupon payments left between a date and maturity
    Payments(PaymentsArgs),

    /// Calculate the DV01 of a level-coupon bond
    Dv01(Dv01Args),

    /// Estimate historical and variance-covariance VaR of a level series
    Var(VarArgs),

    /// Check that portfolio weights sum to one
    Weights(WeightsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
