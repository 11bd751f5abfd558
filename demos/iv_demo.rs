// demos/iv_demo.rs
//
// Reads observed option prices from a CSV file (or a built-in sample when
// no path is given) and prints the implied volatility per strike.
//
// Usage:
//     cargo run --example iv_demo -- [csv_path]
//
// The CSV must contain `strike_price` and `observed_price` columns; all
// rows are quoted against the same spot.

use std::env;

use anyhow::Result;
use bsgrid_lib::{implied_vol_grid, OptionType, SolverConfig};

const SAMPLE_CSV: &str = "\
strike_price,observed_price
90.0,14.437116
100.0,6.888729
110.0,3.427316
120.0,150.0
";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    strike_price: f64,
    observed_price: f64,
}

fn load_rows(path: Option<&str>) -> Result<Vec<CsvRow>> {
    let input: Box<dyn std::io::Read> = match path {
        Some(path) => Box::new(std::fs::File::open(path)?),
        None => {
            println!("No CSV path given, using the built-in sample chain.");
            Box::new(SAMPLE_CSV.as_bytes())
        }
    };
    let mut reader = csv::Reader::from_reader(input);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let rows = load_rows(args.get(1).map(String::as_str))?;

    let spot = 100.0;
    let (r, q, t) = (0.05, 0.0, 0.5);

    let strikes: Vec<f64> = rows.iter().map(|row| row.strike_price).collect();
    let observed: Vec<f64> = rows.iter().map(|row| row.observed_price).collect();

    let grid = implied_vol_grid(
        OptionType::Call,
        &[spot],
        &strikes,
        r,
        q,
        t,
        &observed,
        &SolverConfig::default(),
    )?;

    println!("\nImplied volatilities (S={}, T={} years):", spot, t);
    println!("{:<10} {:<14} {:<10}", "Strike", "Observed", "IV");
    println!("{}", "-".repeat(34));
    for (j, strike) in grid.strikes.iter().enumerate() {
        match grid.vols[0][j] {
            Some(iv) => println!("{:<10.1} {:<14.4} {:<10.2}%", strike, observed[j], iv * 100.0),
            None => println!("{:<10.1} {:<14.4} {:<10}", strike, observed[j], "unresolved"),
        }
    }

    if grid.unresolved_count() > 0 {
        eprintln!(
            "Warning: {} cell(s) had no volatility consistent with the observed price.",
            grid.unresolved_count()
        );
    }

    Ok(())
}
