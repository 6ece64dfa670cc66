//! Complete single-scenario output record.
//!
//! [`PricingSummary`] captures one full evaluation of the engine: the
//! inputs it ran with, the d1/d2 terms, both prices and every greek on
//! both sides. It is a plain value type so callers can log it, tabulate
//! it or (with the `serde` feature) write it straight to CSV or JSON.

/// Every output of the Black-Scholes engine for one parameter set.
///
/// Produced by [`BlackScholes::summary`](crate::BlackScholes::summary).
/// Vega, theta and rho carry the engine's 0.01 scaling; theta in
/// particular is per 0.01 years, not per day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingSummary {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub d1: f64,
    pub d2: f64,
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub call_theta: f64,
    pub put_theta: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}
