//! VaR command implementation.
//!
//! Takes a series of portfolio levels, converts them to simple returns and
//! prints both estimators side by side.

use anyhow::Result;
use bondrisk_analytics::risk::{simple_returns, VarComparison};
use bondrisk_core::RiskConfig;
use clap::Args;

use crate::cli::OutputFormat;
use crate::output::{
    format_percent, print_csv, print_header, print_json_value, print_table, KeyValue,
};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    /// Portfolio levels in date order, comma separated
    #[arg(short, long, value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    pub levels: Vec<f64>,

    /// Confidence level in percent
    #[arg(short, long, default_value = "95", value_parser = clap::value_parser!(u8).range(90..=99))]
    pub confidence: u8,
}

/// Execute the var command.
pub fn execute(args: VarArgs, config: &RiskConfig, format: OutputFormat) -> Result<()> {
    let confidence = f64::from(args.confidence) / 100.0;
    let returns = simple_returns(&args.levels)?;
    let var = VarComparison::from_returns(&returns, confidence, config)?;

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Confidence", format!("{}%", args.confidence)),
                KeyValue::new("Returns", returns.len().to_string()),
                KeyValue::new(var.historical.method.label(), format_percent(var.historical.value)),
                KeyValue::new(var.parametric.method.label(), format_percent(var.parametric.value)),
            ];
            if format == OutputFormat::Table {
                print_header("Value at Risk");
                print_table(&rows)?;
            } else {
                print_csv(&rows)?;
            }
        }
        OutputFormat::Json => print_json_value(&var)?,
        OutputFormat::Minimal => println!("{var}"),
    }

    Ok(())
}
