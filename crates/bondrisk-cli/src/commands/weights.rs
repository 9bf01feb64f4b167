//! Weights command implementation.

use anyhow::Result;
use bondrisk_analytics::portfolio::{check_weights, WeightValidity};
use bondrisk_core::types::{Cusip, WeightEntry, Weights};
use bondrisk_core::RiskConfig;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::parse_weight_arg;
use crate::output::{
    print_csv, print_header, print_json_value, print_success, print_table, print_warning,
};

/// Arguments for the weights command.
#[derive(Args, Debug)]
pub struct WeightsArgs {
    /// Weight of one bond as CUSIP=WEIGHT; repeat for each bond
    #[arg(short, long = "weight", required_unless_present = "equal")]
    pub weights: Vec<String>,

    /// Assign equal weights to these bonds instead
    #[arg(long, num_args = 1.., conflicts_with = "weights")]
    pub equal: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct WeightRow {
    #[tabled(rename = "CUSIP")]
    cusip: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// CSV record: every row repeats the check so the file stays rectangular.
#[derive(Debug, Serialize)]
struct WeightCsvRow<'a> {
    cusip: String,
    weight: String,
    sum: String,
    valid: bool,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct WeightsReport {
    weights: Vec<WeightEntry>,
    #[serde(flatten)]
    validity: WeightValidity,
    message: &'static str,
}

/// Execute the weights command.
pub fn execute(args: WeightsArgs, config: &RiskConfig, format: OutputFormat) -> Result<()> {
    let entries: Vec<WeightEntry> = if args.equal.is_empty() {
        args.weights
            .iter()
            .map(|arg| parse_weight_arg(arg))
            .collect::<Result<_, _>>()?
    } else {
        let cusips = args
            .equal
            .iter()
            .map(|c| Cusip::new(c))
            .collect::<Result<Vec<_>, _>>()?;
        Weights::equal(cusips).entries()
    };

    let validity = check_weights(&entries, config.weight_tolerance);
    let sum = validity
        .sum
        .map_or_else(|| "overflow".to_string(), |s| s.to_string());

    match format {
        OutputFormat::Table => {
            let rows: Vec<WeightRow> = entries
                .iter()
                .map(|e| WeightRow {
                    cusip: e.cusip.to_string(),
                    weight: e.weight.to_string(),
                })
                .collect();
            print_header("Portfolio Weights");
            print_table(&rows)?;
            println!("Sum: {sum}");
            if validity.valid {
                print_success(validity.message());
            } else {
                print_warning(validity.message());
            }
        }
        OutputFormat::Csv => {
            let rows: Vec<WeightCsvRow<'_>> = entries
                .iter()
                .map(|e| WeightCsvRow {
                    cusip: e.cusip.to_string(),
                    weight: e.weight.to_string(),
                    sum: sum.clone(),
                    valid: validity.valid,
                    message: validity.message(),
                })
                .collect();
            print_csv(&rows)?;
        }
        OutputFormat::Json => print_json_value(&WeightsReport {
            weights: entries,
            validity,
            message: validity.message(),
        })?,
        OutputFormat::Minimal => println!("{}", validity.valid),
    }

    Ok(())
}
