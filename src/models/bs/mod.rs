// Black-Scholes pricing for European options with a continuous dividend
// yield.  The closed-form price and its volatility sensitivity (vega) are
// the only analytics the implied-volatility solver needs.

use statrs::distribution::{Continuous, Normal};

use crate::error::{BsGridError, Result};

/// Side of a vanilla European option.
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

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Standard normal cumulative distribution function.
fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// Standard normal probability density function.
fn norm_pdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.pdf(x)
}

/// Validate the contract parameters shared by pricing and inversion.
pub(crate) fn check_contract(s: f64, k: f64, t: f64) -> Result<()> {
    if s <= 0.0 {
        return Err(BsGridError::domain(format!(
            "spot price must be positive, got {s}"
        )));
    }
    if k <= 0.0 {
        return Err(BsGridError::domain(format!(
            "strike price must be positive, got {k}"
        )));
    }
    if t <= 0.0 {
        return Err(BsGridError::domain(format!(
            "time to expiry must be positive, got {t}"
        )));
    }
    Ok(())
}

/// The d1 term of the Black-Scholes formula. Callers must have validated
/// `s`, `k`, `t` and `sigma` already.
fn d1(s: f64, k: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// Price of a European option under Black-Scholes assumptions.
///
/// # Arguments
///
/// * `kind` - Call or Put
/// * `s` - Spot price of the underlying
/// * `k` - Strike price
/// * `r` - Risk-free rate (annualized, continuous compounding)
/// * `q` - Continuous dividend yield
/// * `t` - Time to expiry in years
/// * `sigma` - Volatility (as decimal, e.g., 0.2 for 20%)
///
/// # Errors
///
/// Returns [`BsGridError::Domain`] when `s`, `k`, `t` or `sigma` is not
/// strictly positive (the formula divides by `sigma * sqrt(t)`), or when
/// the remaining inputs drive the formula to a non-finite value. A price is
/// never reported as a silent `NaN` or infinity.
pub fn price(kind: OptionType, s: f64, k: f64, r: f64, q: f64, t: f64, sigma: f64) -> Result<f64> {
    check_contract(s, k, t)?;
    if sigma <= 0.0 {
        return Err(BsGridError::domain(format!(
            "volatility must be positive, got {sigma}"
        )));
    }

    let d1 = d1(s, k, r, q, t, sigma);
    let d2 = d1 - sigma * t.sqrt();

    let price = match kind {
        OptionType::Call => s * (-q * t).exp() * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2),
        OptionType::Put => k * (-r * t).exp() * norm_cdf(-d2) - s * (-q * t).exp() * norm_cdf(-d1),
    };

    if !price.is_finite() {
        return Err(BsGridError::domain(format!(
            "price is not finite for s={s}, k={k}, r={r}, q={q}, t={t}, sigma={sigma}"
        )));
    }
    Ok(price)
}

/// Vega: sensitivity of the option price to volatility, `∂price/∂σ`.
///
/// Identical for calls and puts. Used as the Newton-Raphson derivative by
/// the implied-volatility solver.
///
/// # Errors
///
/// Same domain preconditions as [`price`].
pub fn vega(s: f64, k: f64, r: f64, q: f64, t: f64, sigma: f64) -> Result<f64> {
    check_contract(s, k, t)?;
    if sigma <= 0.0 {
        return Err(BsGridError::domain(format!(
            "volatility must be positive, got {sigma}"
        )));
    }
    Ok(s * (-q * t).exp() * norm_pdf(d1(s, k, r, q, t, sigma)) * t.sqrt())
}
