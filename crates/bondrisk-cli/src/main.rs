//! Bondrisk CLI - command-line calls into the fixed income risk library.
//!
//! # Usage
//!
//! ```bash
//! # Remaining coupon payments
//! bondrisk payments --date 2023-03-01 --maturity 2028-03-01
//!
//! # DV01 of a bond at a 3% yield
//! bondrisk dv01 --yield 3.0 --coupon 50 --date 2023-03-01 --maturity 2028-03-01
//!
//! # Both VaR estimates of a level series at 95%
//! bondrisk var --levels 3.00,3.02,2.97,3.05,3.10,3.04 --confidence 95
//!
//! # Check a weight vector
//! bondrisk weights --weight 912810FG8=0.6 --weight 912828Z22=0.4
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let risk_config = config::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Payments(args) => commands::payments::execute(args, format)?,
        Commands::Dv01(args) => commands::dv01::execute(args, &risk_config, format)?,
        Commands::Var(args) => commands::var::execute(args, &risk_config, format)?,
        Commands::Weights(args) => commands::weights::execute(args, &risk_config, format)?,
    }

    Ok(())
}
