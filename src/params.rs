// src/params.rs

//! Contract and market parameters for the Black-Scholes engine.
//!
//! [`OptionParams`] is the five-field input record shared by every operation:
//! spot, strike, time to maturity (years), risk-free rate and volatility.
//! Validation happens once, when the value is created through
//! [`OptionParams::new`]; the engine itself assumes validated inputs.
//!
//! [`OptionType`] is a closed call/put enumeration. Selecting an option side
//! by free-form string (and signalling a bad selector with a sentinel value)
//! is exactly the failure mode this type removes: an invalid side does not
//! typecheck, so no runtime error for it exists.

use crate::error::PricingError;
use std::fmt;

/// Side of a European vanilla option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Parameters for pricing a European vanilla option under Black-Scholes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Current underlying price S (must be > 0)
    pub spot: f64,
    /// Strike price K (must be > 0)
    pub strike: f64,
    /// Time to maturity T in years (must be > 0)
    pub maturity: f64,
    /// Continuously-compounded risk-free rate r (may be negative)
    pub rate: f64,
    /// Annualized volatility sigma of the underlying (must be > 0)
    pub volatility: f64,
}

/// Helper function to validate option parameters for physical and
/// non-degeneracy constraints.
fn validate_option_params(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
) -> Result<(), PricingError> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(PricingError::InvalidParameter {
            field: "spot",
            constraint: "> 0 and finite",
            value: spot,
        });
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(PricingError::InvalidParameter {
            field: "strike",
            constraint: "> 0 and finite",
            value: strike,
        });
    }
    if maturity <= 0.0 || !maturity.is_finite() {
        return Err(PricingError::InvalidParameter {
            field: "maturity",
            constraint: "> 0 years and finite",
            value: maturity,
        });
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidParameter {
            field: "rate",
            constraint: "finite",
            value: rate,
        });
    }
    if volatility < 0.0 || !volatility.is_finite() {
        return Err(PricingError::InvalidParameter {
            field: "volatility",
            constraint: ">= 0 and finite",
            value: volatility,
        });
    }
    // Zero volatility would put a zero in the d1/d2 denominator
    if volatility == 0.0 {
        return Err(PricingError::DegenerateInput {
            field: "volatility",
            value: volatility,
        });
    }

    Ok(())
}

impl OptionParams {
    /// Creates new option parameters with validation.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        validate_option_params(spot, strike, maturity, rate, volatility)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        })
    }

    /// Validates the current parameter set.
    ///
    /// Fields are public, so a value built as a struct literal can hold
    /// anything; call this before handing such a value to the engine.
    pub fn validate(&self) -> Result<(), PricingError> {
        validate_option_params(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_params_validation() {
        // Valid parameters should work
        let valid = OptionParams::new(100.0, 95.0, 1.0, 0.05, 0.2);
        assert!(valid.is_ok());

        // Test invalid parameters
        assert!(OptionParams::new(0.0, 95.0, 1.0, 0.05, 0.2).is_err()); // zero spot
        assert!(OptionParams::new(-100.0, 95.0, 1.0, 0.05, 0.2).is_err()); // negative spot
        assert!(OptionParams::new(100.0, 0.0, 1.0, 0.05, 0.2).is_err()); // zero strike
        assert!(OptionParams::new(100.0, -95.0, 1.0, 0.05, 0.2).is_err()); // negative strike
        assert!(OptionParams::new(100.0, 95.0, 0.0, 0.05, 0.2).is_err()); // zero maturity
        assert!(OptionParams::new(100.0, 95.0, -1.0, 0.05, 0.2).is_err()); // negative maturity
        assert!(OptionParams::new(100.0, 95.0, 1.0, 0.05, -0.2).is_err()); // negative volatility
    }

    #[test]
    fn test_negative_rate_is_allowed() {
        // Negative rates are a real market regime, not an input defect
        let params = OptionParams::new(100.0, 100.0, 1.0, -0.01, 0.2);
        assert!(params.is_ok());
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(OptionParams::new(f64::NAN, 95.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParams::new(100.0, f64::INFINITY, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParams::new(100.0, 95.0, f64::NAN, 0.05, 0.2).is_err());
        assert!(OptionParams::new(100.0, 95.0, 1.0, f64::NAN, 0.2).is_err());
        assert!(OptionParams::new(100.0, 95.0, 1.0, f64::NEG_INFINITY, 0.2).is_err());
        assert!(OptionParams::new(100.0, 95.0, 1.0, 0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_volatility_is_degenerate_not_invalid() {
        let err = OptionParams::new(100.0, 95.0, 1.0, 0.05, 0.0).unwrap_err();
        assert!(
            matches!(err, PricingError::DegenerateInput { field: "volatility", .. }),
            "zero volatility should be DegenerateInput, got {:?}",
            err
        );

        let err = OptionParams::new(100.0, 95.0, 1.0, 0.05, -0.2).unwrap_err();
        assert!(
            matches!(err, PricingError::InvalidParameter { field: "volatility", .. }),
            "negative volatility should be InvalidParameter, got {:?}",
            err
        );
    }

    #[test]
    fn test_error_names_the_offending_field() {
        let err = OptionParams::new(100.0, -95.0, 1.0, 0.05, 0.2).unwrap_err();
        match err {
            PricingError::InvalidParameter { field, value, .. } => {
                assert_eq!(field, "strike");
                assert_eq!(value, -95.0);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rechecks_literal_construction() {
        let params = OptionParams {
            spot: 100.0,
            strike: 95.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.0,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_option_type_display() {
        assert_eq!(OptionType::Call.to_string(), "call");
        assert_eq!(OptionType::Put.to_string(), "put");
    }
}
