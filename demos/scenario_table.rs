// Example: scenario_table.rs
// Loads labelled option scenarios from a CSV file, prices each through the
// engine and prints an aligned table of prices and call-side greeks.
//
// Usage:
//     cargo run --example scenario_table [-- <scenarios.csv>]
//
// The CSV must carry the columns label, spot, strike, maturity, rate and
// volatility. Without an argument the bundled sample file is used.

use std::env;
use std::error::Error;

use blackscholes_lib::{summarize, OptionParams};
use csv::ReaderBuilder;

#[derive(serde::Deserialize, Clone)]
struct CsvRow {
    label: String,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
}

impl CsvRow {
    fn params(&self) -> Result<OptionParams, Box<dyn Error>> {
        Ok(OptionParams::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )?)
    }
}

fn load_csv(path: &str) -> Result<Vec<CsvRow>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: CsvRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let path = match args.len() {
        1 => "demos/data/sample_scenarios.csv",
        2 => args[1].as_str(),
        _ => {
            eprintln!("Usage: {} [scenarios.csv]", args[0]);
            std::process::exit(1);
        }
    };

    let rows = load_csv(path)?;
    if rows.is_empty() {
        return Err("No scenarios found in input file".into());
    }
    println!("Loaded {} scenarios from {}", rows.len(), path);

    println!(
        "\n{:<16} {:>10} {:>10} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "Label", "Call", "Put", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    println!("{}", "-".repeat(88));

    let mut call_prices = Vec::with_capacity(rows.len());
    for row in &rows {
        let summary = summarize(&row.params()?)?;
        call_prices.push(summary.call_price);
        println!(
            "{:<16} {:>10.4} {:>10.4} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
            row.label,
            summary.call_price,
            summary.put_price,
            summary.call_delta,
            summary.gamma,
            summary.vega,
            summary.call_theta,
            summary.call_rho
        );
    }
    println!("  (call-side greeks; vega and rho per percentage point, theta per 0.01 years)");

    let avg_call: f64 = call_prices.iter().sum::<f64>() / call_prices.len() as f64;
    println!("\nSummary Statistics:");
    println!("  Scenarios priced: {}", call_prices.len());
    println!("  Average call price: {:.4}", avg_call);

    Ok(())
}
