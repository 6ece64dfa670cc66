// src/distributions.rs

//! Standard normal distribution primitives.
//!
//! Thin wrappers over the statrs standard normal so that the rest of the
//! crate never constructs distribution objects inline. Φ is the CDF and
//! φ the density; d1/d2 and every greek are built from these two.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn std_normal() -> Normal {
    // Normal::new only fails for non-positive standard deviation
    Normal::new(0.0, 1.0).unwrap()
}

/// Standard normal cumulative distribution function Φ(x).
pub fn norm_cdf(x: f64) -> f64 {
    std_normal().cdf(x)
}

/// Standard normal probability density function φ(x).
pub fn norm_pdf(x: f64) -> f64 {
    std_normal().pdf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, max_relative = 1e-12);
        assert_relative_eq!(norm_cdf(1.0), 0.841344746069, max_relative = 1e-9);
        assert_relative_eq!(norm_cdf(-1.0), 0.158655253931, max_relative = 1e-9);
        assert_relative_eq!(norm_cdf(1.96), 0.975002104852, max_relative = 1e-9);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), 0.398942280401, max_relative = 1e-9);
        assert_relative_eq!(norm_pdf(1.0), 0.241970724519, max_relative = 1e-9);
    }

    #[test]
    fn test_symmetry_identities() {
        for &x in &[0.1, 0.5, 1.0, 2.3, 4.0] {
            assert_relative_eq!(norm_pdf(-x), norm_pdf(x), max_relative = 1e-12);
            assert_relative_eq!(norm_cdf(-x), 1.0 - norm_cdf(x), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_cdf_saturates_in_the_tails() {
        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
    }
}
