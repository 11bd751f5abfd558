//! Implied-volatility extraction via Newton-Raphson.
//!
//! Inverts the Black-Scholes formula for the volatility that reproduces an
//! observed market price, using the closed-form vega as the derivative.
//! Convergence failure is reported in-band as `None` rather than as an
//! error, so batch grid evaluation continues past unresolved cells.

pub mod config;

pub use config::SolverConfig;

use crate::error::Result;
use crate::models::bs::{self, OptionType};

/// Smallest vega the Newton step will divide by.
const MIN_VEGA: f64 = 1e-12;

/// Solve for the volatility that reproduces `observed_price`.
///
/// Iterates `σ ← σ - (price(σ) - observed) / vega(σ)` from
/// `config.initial_vol` until the price error drops below
/// `config.tolerance` or the iteration budget is exhausted. The model price
/// is strictly increasing in σ, so a unique root exists exactly when the
/// observed price lies strictly between the discounted intrinsic floor and
/// the large-volatility limit; prices outside that interval are reported as
/// unresolved without iterating.
///
/// # Returns
///
/// * `Ok(Some(sigma))` - the converged volatility
/// * `Ok(None)` - no volatility reconciles the price: the observed price is
///   unattainable, the derivative underflowed, the iterate left `(0, ∞)`,
///   or the budget ran out
///
/// # Errors
///
/// Returns [`BsGridError::Domain`](crate::BsGridError::Domain) only when
/// the pricing inputs themselves are invalid (non-positive spot, strike or
/// expiry) - never for a convergence failure.
#[allow(clippy::too_many_arguments)]
pub fn implied_vol(
    kind: OptionType,
    observed_price: f64,
    s: f64,
    k: f64,
    r: f64,
    q: f64,
    t: f64,
    config: &SolverConfig,
) -> Result<Option<f64>> {
    bs::check_contract(s, k, t)?;

    let (floor, sup) = attainable_range(kind, s, k, r, q, t);
    if observed_price <= floor || observed_price >= sup {
        return Ok(None);
    }

    let mut sigma = config.initial_vol;
    for _ in 0..config.max_iterations {
        if sigma <= 0.0 || !sigma.is_finite() {
            // The iterate left the formula's domain; the inputs were fine.
            return Ok(None);
        }

        let diff = bs::price(kind, s, k, r, q, t, sigma)? - observed_price;
        if diff.abs() < config.tolerance {
            return Ok(Some(sigma));
        }

        let vega = bs::vega(s, k, r, q, t, sigma)?;
        if vega.abs() < MIN_VEGA {
            return Ok(None);
        }
        sigma -= diff / vega;
    }

    Ok(None)
}

/// Open interval of prices the model can produce as σ sweeps `(0, ∞)`:
/// discounted intrinsic value at the lower end, the discounted spot (call)
/// or strike (put) at the upper end.
fn attainable_range(kind: OptionType, s: f64, k: f64, r: f64, q: f64, t: f64) -> (f64, f64) {
    let disc_spot = s * (-q * t).exp();
    let disc_strike = k * (-r * t).exp();
    match kind {
        OptionType::Call => ((disc_spot - disc_strike).max(0.0), disc_spot),
        OptionType::Put => ((disc_strike - disc_spot).max(0.0), disc_strike),
    }
}
