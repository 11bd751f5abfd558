// demos/plot_price_curve.rs
//
// Prices a strike ladder at a fixed spot and renders call and put price
// curves to an SVG file in the working directory.
//
// Usage:
//     cargo run --example plot_price_curve

use std::error::Error;

use bsgrid_lib::{price_grid, OptionType};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let spot = 100.0;
    let (r, q, t, sigma) = (0.05, 0.0, 1.0, 0.2);

    // 21 strikes over 80..120, the ladder the dashboard uses.
    let strikes: Vec<f64> = (0..21).map(|i| 80.0 + 2.0 * i as f64).collect();

    let calls = price_grid(OptionType::Call, &[spot], &strikes, r, q, t, sigma)?;
    let puts = price_grid(OptionType::Put, &[spot], &strikes, r, q, t, sigma)?;

    let call_points: Vec<(f64, f64)> = strikes
        .iter()
        .zip(calls.prices[0].iter())
        .map(|(&k, &p)| (k, p))
        .collect();
    let put_points: Vec<(f64, f64)> = strikes
        .iter()
        .zip(puts.prices[0].iter())
        .map(|(&k, &p)| (k, p))
        .collect();

    let max_price = call_points
        .iter()
        .chain(put_points.iter())
        .map(|&(_, p)| p)
        .fold(f64::NEG_INFINITY, f64::max);

    let out_path = "price_curve.svg";
    let root = SVGBackend::new(out_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Option price vs strike (S={spot}, sigma={sigma})"),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(78.0..122.0, 0.0..(max_price * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Strike")
        .y_desc("Price")
        .draw()?;

    chart
        .draw_series(LineSeries::new(call_points, &BLUE))?
        .label("call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(put_points, &RED))?
        .label("put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("Wrote {}", out_path);

    Ok(())
}
