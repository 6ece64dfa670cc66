//! # BlackScholes-Lib: Closed-Form European Option Pricing
//!
//! `blackscholes-lib` is a lightweight Rust library for pricing European vanilla options and
//! computing their sensitivities with the closed-form Black-Scholes model. The engine is
//! stateless: a parameter set is validated once when it is created, and every price or greek is
//! then a pure function of those five numbers, so identical inputs always produce identical
//! outputs.
//!
//! ## Core Features
//!
//! - **Pricing**: Call and put prices from the Black-Scholes formula
//! - **Greeks**: Delta, gamma, vega, theta and rho with a documented scaling contract
//! - **Typed Validation**: Non-physical and degenerate inputs rejected at construction
//! - **Scenario Sweeps**: Spot x volatility grids with TOML configuration and CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use blackscholes_lib::{BlackScholes, OptionParams, OptionType};
//!
//! // Validate the contract once
//! let params = OptionParams::new(100.0, 95.0, 1.0, 0.05, 0.2)?;
//!
//! // Read prices and greeks off the closed form
//! let engine = BlackScholes::new(params);
//! let call = engine.price(OptionType::Call);
//! let delta = engine.delta(OptionType::Call);
//!
//! assert!(call > 0.0 && delta > 0.5);
//! # Ok::<(), blackscholes_lib::PricingError>(())
//! ```
//!
//! ## Scaling Conventions
//!
//! Delta and gamma are raw partial derivatives. Vega and rho are scaled by 0.01 and read as the
//! price move per one percentage point of volatility and rate. Theta is the annual time decay
//! scaled by 0.01, so it is per 0.01 **years**, not per calendar day.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod params;
pub mod summary;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Engine and parameter types
pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use params::{OptionParams, OptionType};
pub use summary::PricingSummary;

// Standard normal helpers used by the engine
pub use distributions::{norm_cdf, norm_pdf};

// Scenario sweep types and functions
#[cfg(feature = "serde")]
pub use sweep::write_csv;
pub use sweep::{run_sweep, SweepAxis, SweepCell, SweepConfig};

// ================================================================================================
// CONVENIENCE API
// ================================================================================================

/// Price a European vanilla option in a single call.
///
/// Validates `params` and returns the Black-Scholes price of the requested side. Because the
/// parameter fields are public, a value built as a plain struct literal may hold anything; this
/// entry point re-checks it before pricing. Construct a [`BlackScholes`] directly when several
/// outputs are needed for the same parameter set.
///
/// # Arguments
///
/// * `option_type` - Side of the option to price, [`OptionType::Call`] or [`OptionType::Put`]
/// * `params` - Contract and market parameters (spot, strike, maturity, rate, volatility)
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] if any field is non-physical or non-finite
/// * [`PricingError::DegenerateInput`] if the volatility is exactly zero
///
/// # Example
///
/// ```rust
/// use blackscholes_lib::{price_option, OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 95.0, 1.0, 0.05, 0.2)?;
/// let call = price_option(OptionType::Call, &params)?;
/// let put = price_option(OptionType::Put, &params)?;
///
/// // Put-call parity: C - P = S - K * exp(-rT)
/// let forward = 100.0 - 95.0 * (-0.05f64).exp();
/// assert!((call - put - forward).abs() < 1e-9);
/// # Ok::<(), blackscholes_lib::PricingError>(())
/// ```
pub fn price_option(option_type: OptionType, params: &OptionParams) -> Result<f64, PricingError> {
    params.validate()?;
    Ok(BlackScholes::new(*params).price(option_type))
}

/// Evaluate every engine output for one parameter set.
///
/// Validates `params` and returns the full [`PricingSummary`] record: the inputs, d1/d2, both
/// prices and both sides of every greek. This is the one-stop call for logging or tabulating a
/// complete scenario.
pub fn summarize(params: &OptionParams) -> Result<PricingSummary, PricingError> {
    params.validate()?;
    Ok(BlackScholes::new(*params).summary())
}
