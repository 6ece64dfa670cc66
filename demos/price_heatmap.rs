// Example: price_heatmap.rs
// Runs a spot x volatility sweep and renders side-by-side call/put price
// heatmaps to an SVG, plus a CSV export of the full grid.
//
// Usage:
//     cargo run --example price_heatmap [-- <sweep_config.toml>]
//
// Without an argument the fine preset grid is used. Outputs are written to
// price_heatmap.svg and price_heatmap.csv in the working directory.

use std::env;
use std::error::Error;

use blackscholes_lib::{run_sweep, write_csv, SweepCell, SweepConfig};
use plotters::prelude::*;

fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    RGBColor(
        (255.0 * t) as u8,
        (64.0 + 96.0 * (1.0 - t)) as u8,
        (255.0 * (1.0 - t)) as u8,
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let config = match args.len() {
        1 => SweepConfig::fine(),
        2 => SweepConfig::from_toml_path(&args[1])?,
        _ => {
            eprintln!(
                "Usage: {} [sweep_config.toml]\nExample: {} sweep.toml",
                args[0], args[0]
            );
            std::process::exit(1);
        }
    };

    println!(
        "Sweeping {} x {} grid: spot [{:.1}, {:.1}], volatility [{:.2}, {:.2}]",
        config.spot.steps,
        config.volatility.steps,
        config.spot.min,
        config.spot.max,
        config.volatility.min,
        config.volatility.max
    );
    println!(
        "Contract: strike {:.1}, maturity {:.2}y, rate {:.2}%",
        config.strike,
        config.maturity,
        config.rate * 100.0
    );

    let cells = run_sweep(&config)?;
    println!("Priced {} grid points", cells.len());

    write_csv(&cells, "price_heatmap.csv")?;
    println!("Grid exported to price_heatmap.csv");

    // Half a grid step on each axis, so rectangles center on their sample
    let half_ds =
        0.5 * (config.spot.max - config.spot.min) / (config.spot.steps - 1) as f64;
    let half_dv =
        0.5 * (config.volatility.max - config.volatility.min) / (config.volatility.steps - 1) as f64;

    let root = SVGBackend::new("price_heatmap.svg", (1280, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let sides: [(&str, fn(&SweepCell) -> f64); 2] = [
        ("Call Price", |c: &SweepCell| c.call_price),
        ("Put Price", |c: &SweepCell| c.put_price),
    ];

    for (panel, (title, select)) in panels.iter().zip(sides) {
        let max_price = cells.iter().map(select).fold(f64::NEG_INFINITY, f64::max);

        let mut chart = ChartBuilder::on(panel)
            .margin(20)
            .caption(
                format!(
                    "{} | K={:.0} T={:.2}y r={:.1}%",
                    title,
                    config.strike,
                    config.maturity,
                    config.rate * 100.0
                ),
                ("sans-serif", 24),
            )
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (config.spot.min - half_ds)..(config.spot.max + half_ds),
                (config.volatility.min - half_dv)..(config.volatility.max + half_dv),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("Spot")
            .y_desc("Volatility")
            .draw()?;

        chart.draw_series(cells.iter().map(|cell| {
            let t = if max_price > 0.0 {
                select(cell) / max_price
            } else {
                0.0
            };
            Rectangle::new(
                [
                    (cell.spot - half_ds, cell.volatility - half_dv),
                    (cell.spot + half_ds, cell.volatility + half_dv),
                ],
                heat_color(t).filled(),
            )
        }))?;

        println!("{}: max {:.4} on the grid", title, max_price);
    }

    println!("Chart saved to price_heatmap.svg");
    Ok(())
}
