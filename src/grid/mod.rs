//! Cross-product evaluation of the pricing engine and the volatility
//! solver over spot and strike axes.
//!
//! Cells are mutually independent: evaluation walks spots in the outer loop
//! and strikes in the inner loop purely to lay the output out row-major,
//! and no cell reads or writes state shared with another.

pub mod types;

pub use types::{ImpliedVolGrid, PriceGrid};

use crate::error::{BsGridError, Result};
use crate::models::bs::{self, OptionType};
use crate::solver::{self, SolverConfig};

/// Axis point used when the caller omits a spot or strike list.
pub const DEFAULT_AXIS_VALUE: f64 = 100.0;

/// Resolve an optional axis to a concrete list of grid points.
///
/// Absent and empty lists both fall back to the single-point default axis
/// `[100.0]`. This substitution runs once, before grid construction - it is
/// never an implicit fallback inside the evaluation loop.
pub fn resolve_axis(axis: Option<Vec<f64>>) -> Vec<f64> {
    match axis {
        Some(values) if !values.is_empty() => values,
        _ => vec![DEFAULT_AXIS_VALUE],
    }
}

/// Price every `(spot, strike)` pair at a flat volatility.
///
/// # Errors
///
/// Any cell whose parameters violate the pricing preconditions aborts the
/// whole evaluation with [`BsGridError::Domain`]; a partially filled grid
/// is never returned.
#[allow(clippy::too_many_arguments)]
pub fn price_grid(
    kind: OptionType,
    spots: &[f64],
    strikes: &[f64],
    r: f64,
    q: f64,
    t: f64,
    sigma: f64,
) -> Result<PriceGrid> {
    let mut prices = Vec::with_capacity(spots.len());
    for &spot in spots {
        let mut row = Vec::with_capacity(strikes.len());
        for &strike in strikes {
            row.push(bs::price(kind, spot, strike, r, q, t, sigma)?);
        }
        prices.push(row);
    }

    Ok(PriceGrid {
        spots: spots.to_vec(),
        strikes: strikes.to_vec(),
        prices,
    })
}

/// Recover the implied volatility for every `(spot, strike)` pair from a
/// flat list of observed prices.
///
/// `observed` must hold exactly `spots.len() * strikes.len()` entries and
/// is consumed in the same row-major order used to populate the output:
/// cell `(i, j)` reads index `i * strikes.len() + j`. Cells that fail to
/// converge come back as `None` without disturbing their siblings.
///
/// # Errors
///
/// * [`BsGridError::Validation`] when the observation count does not match
///   the grid size - raised before any cell is evaluated.
/// * [`BsGridError::Domain`] when a spot or strike in the axes violates the
///   pricing preconditions; this aborts the evaluation.
#[allow(clippy::too_many_arguments)]
pub fn implied_vol_grid(
    kind: OptionType,
    spots: &[f64],
    strikes: &[f64],
    r: f64,
    q: f64,
    t: f64,
    observed: &[f64],
    config: &SolverConfig,
) -> Result<ImpliedVolGrid> {
    let expected = spots.len() * strikes.len();
    if observed.len() != expected {
        return Err(BsGridError::validation(format!(
            "price_list has {} entries but the grid has {} cells ({} spots x {} strikes)",
            observed.len(),
            expected,
            spots.len(),
            strikes.len()
        )));
    }

    let mut vols = Vec::with_capacity(spots.len());
    let mut idx = 0;
    for &spot in spots {
        let mut row = Vec::with_capacity(strikes.len());
        for &strike in strikes {
            let observed_price = observed[idx];
            idx += 1;
            row.push(solver::implied_vol(
                kind,
                observed_price,
                spot,
                strike,
                r,
                q,
                t,
                config,
            )?);
        }
        vols.push(row);
    }

    Ok(ImpliedVolGrid {
        spots: spots.to_vec(),
        strikes: strikes.to_vec(),
        vols,
    })
}
