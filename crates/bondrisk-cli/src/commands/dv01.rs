//! DV01 command implementation.

use anyhow::Result;
use bondrisk_analytics::risk::dv01_with_config;
use bondrisk_core::schedule::num_payments_left;
use bondrisk_core::RiskConfig;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, parse_frequency, validate_yield};
use crate::output::{print_csv, print_header, print_json_value, print_table, KeyValue};

/// Arguments for the dv01 command.
#[derive(Args, Debug)]
pub struct Dv01Args {
    /// Yield to maturity (as percentage, e.g., 3.0 for 3%)
    #[arg(short = 'y', long = "yield", allow_negative_numbers = true)]
    pub yield_value: f64,

    /// Coupon amount paid each period
    #[arg(short, long)]
    pub coupon: f64,

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
struct Dv01Result {
    observation_date: String,
    maturity_date: String,
    ytm: f64,
    coupon: f64,
    payments: u32,
    yield_bump: f64,
    face_value: f64,
    dv01: f64,
}

/// Execute the dv01 command.
pub fn execute(args: Dv01Args, config: &RiskConfig, format: OutputFormat) -> Result<()> {
    let ytm = validate_yield(args.yield_value)? / 100.0;
    let date = parse_date(&args.date)?;
    let maturity = parse_date(&args.maturity)?;
    let frequency = parse_frequency(args.frequency)?;

    let payments = num_payments_left(date, maturity, frequency)?;
    let dv01 = dv01_with_config(ytm, args.coupon, payments, config)?;

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Observation Date", date.to_string()),
                KeyValue::new("Maturity", maturity.to_string()),
                KeyValue::new("Yield", format!("{}%", args.yield_value)),
                KeyValue::new("Coupon", args.coupon.to_string()),
                KeyValue::new("Payments Left", payments.to_string()),
                KeyValue::new("DV01", format!("{dv01:.6}")),
            ];
            if format == OutputFormat::Table {
                print_header("Bond DV01");
                print_table(&rows)?;
            } else {
                print_csv(&rows)?;
            }
        }
        OutputFormat::Json => print_json_value(&Dv01Result {
            observation_date: date.to_string(),
            maturity_date: maturity.to_string(),
            ytm,
            coupon: args.coupon,
            payments,
            yield_bump: config.yield_bump,
            face_value: config.face_value,
            dv01,
        })?,
        OutputFormat::Minimal => println!("{dv01:.6}"),
    }

    Ok(())
}
