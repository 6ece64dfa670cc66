// src/sweep.rs

//! Scenario sweeps over a (spot, volatility) grid.
//!
//! A sweep prices one strike/maturity/rate contract across every
//! combination of spot and volatility on two inclusive linear axes. The
//! output is a flat list of [`SweepCell`] rows in volatility-major order
//! (all spots for the first volatility, then all spots for the second),
//! ready for CSV export or heatmap rendering. The sweep only drives the
//! engine; it adds no pricing behavior of its own.

use crate::black_scholes::BlackScholes;
use crate::params::OptionParams;
use anyhow::{anyhow, Result};

/// Inclusive linear range sampled at a fixed number of points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepAxis {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl SweepAxis {
    /// The sampled grid points, from `min` to `max` inclusive.
    pub fn values(&self) -> Vec<f64> {
        (0..self.steps)
            .map(|i| self.min + (self.max - self.min) * i as f64 / (self.steps - 1) as f64)
            .collect()
    }
}

fn validate_axis(name: &str, axis: &SweepAxis) -> Result<()> {
    if axis.steps < 2 {
        return Err(anyhow!(
            "Sweep axis '{}' needs at least 2 steps, got {}",
            name,
            axis.steps
        ));
    }
    if !axis.min.is_finite() || !axis.max.is_finite() {
        return Err(anyhow!(
            "Sweep axis '{}' must have finite bounds, got [{}, {}]",
            name,
            axis.min,
            axis.max
        ));
    }
    if axis.min >= axis.max {
        return Err(anyhow!(
            "Sweep axis '{}' must have min < max, got [{}, {}]",
            name,
            axis.min,
            axis.max
        ));
    }
    if axis.min <= 0.0 {
        return Err(anyhow!(
            "Sweep axis '{}' must be strictly positive, got min = {}",
            name,
            axis.min
        ));
    }
    Ok(())
}

/// Grid and contract definition for one sweep.
///
/// Every field has a default centered on a liquid reference scenario
/// (strike 95, one year, 5% rate, spot 80..120, volatility 5%..50%), so a
/// TOML file only needs to spell out what it changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Spot axis of the grid
    #[cfg_attr(feature = "serde", serde(default = "default_spot_axis"))]
    pub spot: SweepAxis,
    /// Volatility axis of the grid
    #[cfg_attr(feature = "serde", serde(default = "default_vol_axis"))]
    pub volatility: SweepAxis,
    /// Strike shared by every grid point
    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,
    /// Time to maturity in years shared by every grid point
    #[cfg_attr(feature = "serde", serde(default = "default_maturity"))]
    pub maturity: f64,
    /// Risk-free rate shared by every grid point
    #[cfg_attr(feature = "serde", serde(default = "default_rate"))]
    pub rate: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            spot: default_spot_axis(),
            volatility: default_vol_axis(),
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
        }
    }
}

impl SweepConfig {
    /// Coarse preset for quick exploratory grids (11 x 9 points).
    pub fn coarse() -> Self {
        Self {
            spot: SweepAxis {
                min: 80.0,
                max: 120.0,
                steps: 11,
            },
            volatility: SweepAxis {
                min: 0.05,
                max: 0.50,
                steps: 9,
            },
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
        }
    }

    /// Dense preset for smooth heatmap rendering (41 x 37 points).
    pub fn fine() -> Self {
        Self {
            spot: SweepAxis {
                min: 80.0,
                max: 120.0,
                steps: 41,
            },
            volatility: SweepAxis {
                min: 0.05,
                max: 0.50,
                steps: 37,
            },
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
        }
    }

    /// Checks the grid axes and the fixed contract fields.
    pub fn validate(&self) -> Result<()> {
        validate_axis("spot", &self.spot)?;
        validate_axis("volatility", &self.volatility)?;
        // The fixed contract fields share the engine's own validation;
        // probing the lowest grid corner checks all of them at once.
        OptionParams::new(
            self.spot.min,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility.min,
        )?;
        Ok(())
    }

    /// Parses a sweep configuration from TOML text. Missing fields fall
    /// back to their defaults; the result is validated before returning.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: SweepConfig =
            toml::from_str(raw).map_err(|e| anyhow!("Failed to parse sweep config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a sweep configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_path(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read sweep config {}: {}", path, e))?;
        Self::from_toml_str(&raw)
    }
}

/// One priced grid point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepCell {
    pub spot: f64,
    pub volatility: f64,
    pub call_price: f64,
    pub put_price: f64,
}

/// Prices every grid point of the configured sweep.
///
/// Cells come back in volatility-major order: the cell for spot index `i`
/// and volatility index `j` sits at `j * spot.steps + i`.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepCell>> {
    config.validate()?;

    let spots = config.spot.values();
    let vols = config.volatility.values();
    let mut cells = Vec::with_capacity(spots.len() * vols.len());

    for &volatility in &vols {
        for &spot in &spots {
            let params = OptionParams::new(
                spot,
                config.strike,
                config.maturity,
                config.rate,
                volatility,
            )?;
            let engine = BlackScholes::new(params);
            cells.push(SweepCell {
                spot,
                volatility,
                call_price: engine.call_price(),
                put_price: engine.put_price(),
            });
        }
    }

    Ok(cells)
}

/// Writes sweep cells to a CSV file with a header row.
#[cfg(feature = "serde")]
pub fn write_csv(cells: &[SweepCell], path: &str) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| anyhow!("Failed to create {}: {}", path, e))?;
    for cell in cells {
        writer.serialize(cell)?;
    }
    writer.flush()?;
    Ok(())
}

// Default functions for serde

fn default_spot_axis() -> SweepAxis {
    SweepAxis {
        min: 80.0,
        max: 120.0,
        steps: 21,
    }
}

fn default_vol_axis() -> SweepAxis {
    SweepAxis {
        min: 0.05,
        max: 0.50,
        steps: 19,
    }
}

fn default_strike() -> f64 {
    95.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}
