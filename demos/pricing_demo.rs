// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and greeks
//!
//! This example shows how to:
//! 1. Build a validated parameter set
//! 2. Price both sides of the contract
//! 3. Read the full greek profile from a summary
//! 4. Walk a strike ladder around the spot

use anyhow::Result;
use blackscholes_lib::{summarize, BlackScholes, OptionParams, OptionType};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    // One-year contract slightly in the money
    let params = OptionParams::new(100.0, 95.0, 1.0, 0.05, 0.2)?;

    println!("\nContract:");
    println!("  Spot:       {:.2}", params.spot);
    println!("  Strike:     {:.2}", params.strike);
    println!("  Maturity:   {:.2} years", params.maturity);
    println!("  Rate:       {:.2}%", params.rate * 100.0);
    println!("  Volatility: {:.2}%", params.volatility * 100.0);

    println!("\nStep 1: Pricing both sides...");

    let engine = BlackScholes::new(params);
    println!("  Call price: {:.4}", engine.call_price());
    println!("  Put price:  {:.4}", engine.put_price());
    println!("  d1 = {:.6}, d2 = {:.6}", engine.d1(), engine.d2());

    println!("\nStep 2: Full greek profile...");

    let summary = summarize(&params)?;
    println!(
        "{:<6} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
        "Side", "Price", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    println!("{}", "-".repeat(66));
    println!(
        "{:<6} {:<10.4} {:<10.4} {:<10.4} {:<10.4} {:<10.4} {:<10.4}",
        "call",
        summary.call_price,
        summary.call_delta,
        summary.gamma,
        summary.vega,
        summary.call_theta,
        summary.call_rho
    );
    println!(
        "{:<6} {:<10.4} {:<10.4} {:<10.4} {:<10.4} {:<10.4} {:<10.4}",
        "put",
        summary.put_price,
        summary.put_delta,
        summary.gamma,
        summary.vega,
        summary.put_theta,
        summary.put_rho
    );
    println!("  (vega and rho per percentage point, theta per 0.01 years)");

    println!("\nStep 3: Strike ladder...");

    println!(
        "{:<8} {:<12} {:<12} {:<12}",
        "Strike", "Call", "Put", "Call Delta"
    );
    println!("{}", "-".repeat(44));
    for strike in [80.0, 90.0, 95.0, 100.0, 110.0, 120.0] {
        let rung = BlackScholes::new(OptionParams::new(
            params.spot,
            strike,
            params.maturity,
            params.rate,
            params.volatility,
        )?);
        println!(
            "{:<8.0} {:<12.4} {:<12.4} {:<12.4}",
            strike,
            rung.call_price(),
            rung.put_price(),
            rung.delta(OptionType::Call)
        );
    }

    let parity_gap = engine.call_price()
        - engine.put_price()
        - (params.spot - params.strike * (-params.rate * params.maturity).exp());

    println!("\nSummary Statistics:");
    println!("  Put-call parity residual: {:.2e}", parity_gap);
    println!(
        "  Delta identity (call - put): {:.12}",
        summary.call_delta - summary.put_delta
    );

    Ok(())
}
