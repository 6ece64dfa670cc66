// src/black_scholes.rs

//! Closed-form Black-Scholes engine for European vanilla options.
//!
//! Every quantity in this module derives from the two standardized
//! moneyness terms:
//!
//! ```text
//! d1 = (ln(S/K) + (r + sigma^2 / 2) * T) / (sigma * sqrt(T))
//! d2 = d1 - sigma * sqrt(T)
//! ```
//!
//! with prices
//!
//! ```text
//! call = S * Phi(d1) - K * exp(-r * T) * Phi(d2)
//! put  = K * exp(-r * T) * Phi(-d2) - S * Phi(-d1)
//! ```
//!
//! where `Phi` is the standard normal CDF and `phi` its density. Delta and
//! gamma are raw partial derivatives; vega, theta and rho are scaled by
//! 0.01 so they read as price moves per percentage point (see the method
//! docs for the exact convention on each).
//!
//! The engine is stateless beyond its parameter set: the same inputs
//! always produce bit-identical outputs, and no method mutates anything.

use crate::distributions::{norm_cdf, norm_pdf};
use crate::params::{OptionParams, OptionType};
use crate::summary::PricingSummary;

/// Black-Scholes pricing engine over one validated parameter set.
///
/// Construction is infallible; all input checking lives in
/// [`OptionParams::new`]. Methods may be called in any order and any
/// number of times.
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: OptionParams,
}

impl BlackScholes {
    /// Creates an engine for the given parameters.
    ///
    /// Validation happens when creating `OptionParams`, so parameters
    /// reaching this point are already known to be well-formed.
    pub fn new(params: OptionParams) -> Self {
        Self { params }
    }

    /// The parameter set this engine prices against.
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        ((p.spot / p.strike).ln() + (p.rate + 0.5 * p.volatility * p.volatility) * p.maturity)
            / (p.volatility * p.maturity.sqrt())
    }

    /// d2 = d1 − σ·√T
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.volatility * self.params.maturity.sqrt()
    }

    /// Price of the European call: S·Φ(d1) − K·e^(−rT)·Φ(d2).
    pub fn call_price(&self) -> f64 {
        let p = &self.params;
        let discount = (-p.rate * p.maturity).exp();
        p.spot * norm_cdf(self.d1()) - p.strike * discount * norm_cdf(self.d2())
    }

    /// Price of the European put: K·e^(−rT)·Φ(−d2) − S·Φ(−d1).
    pub fn put_price(&self) -> f64 {
        let p = &self.params;
        let discount = (-p.rate * p.maturity).exp();
        p.strike * discount * norm_cdf(-self.d2()) - p.spot * norm_cdf(-self.d1())
    }

    /// Price of the option on the requested side.
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    /// Delta: sensitivity of the price to the spot.
    ///
    /// Φ(d1) for a call, Φ(d1) − 1 for a put. Unscaled, so calls lie in
    /// (0, 1) and puts in (−1, 0).
    pub fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => norm_cdf(self.d1()),
            OptionType::Put => norm_cdf(self.d1()) - 1.0,
        }
    }

    /// Gamma: rate of change of delta with respect to the spot,
    /// φ(d1) / (S·σ·√T). Identical for calls and puts. Unscaled.
    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        norm_pdf(self.d1()) / (p.spot * p.volatility * p.maturity.sqrt())
    }

    /// Vega: price change per one percentage point (0.01) move in
    /// volatility, S·φ(d1)·√T · 0.01. Identical for calls and puts.
    pub fn vega(&self) -> f64 {
        let p = &self.params;
        p.spot * norm_pdf(self.d1()) * p.maturity.sqrt() * 0.01
    }

    /// Theta: time decay of the option price.
    ///
    /// Reported per 0.01 **years** of elapsed time, that is, the annual
    /// decay −∂V/∂T multiplied by 0.01. This is not a per-calendar-day
    /// theta; a trading-desk daily figure would divide the annual decay
    /// by 365 instead. Usually negative, but deep in-the-money puts can
    /// carry a positive theta.
    pub fn theta(&self, option_type: OptionType) -> f64 {
        let p = &self.params;
        let decay = -p.spot * norm_pdf(self.d1()) * p.volatility / (2.0 * p.maturity.sqrt());
        let carry = p.rate * p.strike * (-p.rate * p.maturity).exp();
        let annual = match option_type {
            OptionType::Call => decay - carry * norm_cdf(self.d2()),
            OptionType::Put => decay + carry * norm_cdf(-self.d2()),
        };
        annual * 0.01
    }

    /// Rho: price change per one percentage point (0.01) move in the
    /// risk-free rate. K·T·e^(−rT)·Φ(d2) · 0.01 for a call, and the
    /// mirrored negative term for a put.
    pub fn rho(&self, option_type: OptionType) -> f64 {
        let p = &self.params;
        let strike_exposure = p.strike * p.maturity * (-p.rate * p.maturity).exp();
        match option_type {
            OptionType::Call => strike_exposure * norm_cdf(self.d2()) * 0.01,
            OptionType::Put => -strike_exposure * norm_cdf(-self.d2()) * 0.01,
        }
    }

    /// Evaluates every output of the engine at once.
    ///
    /// The summary holds the inputs, d1/d2, both prices and both sides of
    /// every greek, so downstream code can log or serialize a complete
    /// snapshot without driving the engine itself.
    pub fn summary(&self) -> PricingSummary {
        let p = &self.params;
        PricingSummary {
            spot: p.spot,
            strike: p.strike,
            maturity: p.maturity,
            rate: p.rate,
            volatility: p.volatility,
            d1: self.d1(),
            d2: self.d2(),
            call_price: self.call_price(),
            put_price: self.put_price(),
            call_delta: self.delta(OptionType::Call),
            put_delta: self.delta(OptionType::Put),
            gamma: self.gamma(),
            vega: self.vega(),
            call_theta: self.theta(OptionType::Call),
            put_theta: self.theta(OptionType::Put),
            call_rho: self.rho(OptionType::Call),
            put_rho: self.rho(OptionType::Put),
        }
    }
}
