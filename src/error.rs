// src/error.rs

//! Error taxonomy for the pricing engine.
//!
//! Construction is the single rejection point: every parameter problem is
//! reported when an [`OptionParams`](crate::OptionParams) value is created, so
//! an engine built through the validated path can never divide by zero or
//! propagate NaN. Option-type selection cannot fail at all because
//! [`OptionType`](crate::OptionType) is a closed enum.

use thiserror::Error;

/// Errors produced when constructing or validating pricing inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A construction input is non-physical: non-positive spot, strike or
    /// maturity, negative volatility, or any non-finite field.
    #[error("invalid parameter {field}: must be {constraint}, got {value}")]
    InvalidParameter {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },

    /// A boundary-degenerate input that would place a zero in the d1/d2
    /// denominator (zero volatility; zero maturity falls under the maturity
    /// rule of [`InvalidParameter`](Self::InvalidParameter)).
    #[error("degenerate input {field}: value {value} makes d1 and d2 undefined")]
    DegenerateInput { field: &'static str, value: f64 },
}
