//! Payments command implementation.

use anyhow::Result;
use bondrisk_core::schedule::num_payments_left;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, parse_frequency};
use crate::output::{print_csv, print_header, print_json_value, print_table, KeyValue};

/// Arguments for the payments command.
#[derive(Args, Debug)]
pub struct PaymentsArgs {
    /// Observation (trade) date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Coupon payments per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

#[derive(Debug, Serialize)]
struct PaymentsResult {
    observation_date: String,
    maturity_date: String,
    frequency: u32,
    payments: u32,
}

/// Execute the payments command.
pub fn execute(args: PaymentsArgs, format: OutputFormat) -> Result<()> {
    let date = parse_date(&args.date)?;
    let maturity = parse_date(&args.maturity)?;
    let frequency = parse_frequency(args.frequency)?;

    let payments = num_payments_left(date, maturity, frequency)?;

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Observation Date", date.to_string()),
                KeyValue::new("Maturity", maturity.to_string()),
                KeyValue::new("Frequency", frequency.to_string()),
                KeyValue::new("Payments Left", payments.to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Remaining Payments");
                print_table(&rows)?;
            } else {
                print_csv(&rows)?;
            }
        }
        OutputFormat::Json => print_json_value(&PaymentsResult {
            observation_date: date.to_string(),
            maturity_date: maturity.to_string(),
            frequency: frequency.periods_per_year(),
            payments,
        })?,
        OutputFormat::Minimal => println!("{payments}"),
    }

    Ok(())
}
