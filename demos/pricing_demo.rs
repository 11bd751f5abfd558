// demos/pricing_demo.rs

//! Walkthrough of grid pricing and implied-volatility inversion
//!
//! This example shows how to:
//! 1. Build a strike ladder around the money
//! 2. Price the spot x strike grid at a flat volatility
//! 3. Feed the model prices back through the solver
//! 4. Confirm the volatility round-trips in every cell

use anyhow::Result;
use bsgrid_lib::{implied_vol_grid, price_grid, OptionType, SolverConfig};

fn main() -> Result<()> {
    println!("Black-Scholes Grid Pricing Demo");
    println!("===============================");

    // 21 strikes centered on the money, +/- 20 around 100.
    let strikes = strike_ladder(100.0, 20.0, 21);
    let spots = vec![90.0, 100.0, 110.0];
    let (r, q, t, sigma) = (0.05, 0.0, 1.0, 0.2);

    println!(
        "Grid: {} spots x {} strikes, T={} years, r={:.2}%, sigma={:.0}%",
        spots.len(),
        strikes.len(),
        t,
        r * 100.0,
        sigma * 100.0
    );

    println!("\nStep 1: Pricing the grid...");
    let priced = price_grid(OptionType::Call, &spots, &strikes, r, q, t, sigma)?;

    println!(
        "{:<10} {:<12} {:<12} {:<12}",
        "Strike", "S=90", "S=100", "S=110"
    );
    println!("{}", "-".repeat(48));
    for (j, strike) in priced.strikes.iter().enumerate().step_by(4) {
        println!(
            "{:<10.1} {:<12.4} {:<12.4} {:<12.4}",
            strike, priced.prices[0][j], priced.prices[1][j], priced.prices[2][j]
        );
    }

    println!("\nStep 2: Inverting the model prices back to volatilities...");
    let observed: Vec<f64> = priced.prices.iter().flatten().copied().collect();
    let inverted = implied_vol_grid(
        OptionType::Call,
        &spots,
        &strikes,
        r,
        q,
        t,
        &observed,
        &SolverConfig::default(),
    )?;

    let mut worst = 0.0_f64;
    for row in &inverted.vols {
        for cell in row.iter().flatten() {
            worst = worst.max((cell - sigma).abs());
        }
    }

    println!("Cells inverted: {}", observed.len());
    println!("Unresolved cells: {}", inverted.unresolved_count());
    println!("Worst round-trip error: {:.2e}", worst);

    Ok(())
}

/// Evenly spaced strikes over `center +/- range`.
fn strike_ladder(center: f64, range: f64, points: usize) -> Vec<f64> {
    let step = 2.0 * range / (points - 1) as f64;
    (0..points)
        .map(|i| center - range + i as f64 * step)
        .collect()
}
