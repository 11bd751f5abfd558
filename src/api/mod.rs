//! Request/response contract consumed by the HTTP boundary.
//!
//! The transport itself (routing, status codes, schema middleware) lives
//! outside this crate; these types pin down the wire shapes and the handler
//! functions are pure, so a server can mount them directly. A
//! [`BsGridError::Validation`](crate::BsGridError::Validation) coming out
//! of a handler maps to a client error (HTTP 400) at the transport layer,
//! with no computation performed.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid;
use crate::models::bs::OptionType;
use crate::solver::SolverConfig;

/// Body of a pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Spot prices; defaults to `[100.0]` when omitted or empty.
    #[serde(rename = "S_list", default)]
    pub spots: Option<Vec<f64>>,

    /// Strike prices; defaults to `[100.0]` when omitted or empty.
    #[serde(rename = "K_list", default)]
    pub strikes: Option<Vec<f64>>,

    /// Time to expiry in years.
    #[serde(rename = "T")]
    pub years_to_exp: f64,

    /// Risk-free rate.
    pub r: f64,

    /// Flat volatility applied to every cell.
    pub sigma: f64,

    /// Continuous dividend yield.
    #[serde(default)]
    pub q: f64,

    pub option_type: OptionType,
}

/// Body of a pricing response. `prices[i][j]` corresponds to
/// `(S_list[i], K_list[j])`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    #[serde(rename = "S_list")]
    pub spots: Vec<f64>,

    #[serde(rename = "K_list")]
    pub strikes: Vec<f64>,

    pub prices: Vec<Vec<f64>>,
}

/// Body of an implied-volatility request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IvRequest {
    /// Spot prices; defaults to `[100.0]` when omitted or empty.
    #[serde(rename = "S_list", default)]
    pub spots: Option<Vec<f64>>,

    /// Strike prices; defaults to `[100.0]` when omitted or empty.
    #[serde(rename = "K_list", default)]
    pub strikes: Option<Vec<f64>>,

    /// Time to expiry in years.
    #[serde(rename = "T")]
    pub years_to_exp: f64,

    /// Risk-free rate.
    pub r: f64,

    /// One observed market price per grid cell, flattened row-major; must
    /// hold exactly `|S_list| * |K_list|` entries.
    pub price_list: Vec<f64>,

    /// Continuous dividend yield.
    #[serde(default)]
    pub q: f64,

    pub option_type: OptionType,
}

/// Body of an implied-volatility response. `ivs[i][j]` corresponds to
/// `(S_list[i], K_list[j])`; unresolved cells serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IvResponse {
    #[serde(rename = "S_list")]
    pub spots: Vec<f64>,

    #[serde(rename = "K_list")]
    pub strikes: Vec<f64>,

    pub ivs: Vec<Vec<Option<f64>>>,
}

/// Compute the price grid for a request.
///
/// # Errors
///
/// Propagates [`BsGridError::Domain`](crate::BsGridError::Domain) from the
/// pricing engine for parameters outside the formula's domain.
pub fn calculate_prices(request: &PriceRequest) -> Result<PriceResponse> {
    let spots = grid::resolve_axis(request.spots.clone());
    let strikes = grid::resolve_axis(request.strikes.clone());

    let result = grid::price_grid(
        request.option_type,
        &spots,
        &strikes,
        request.r,
        request.q,
        request.years_to_exp,
        request.sigma,
    )?;

    Ok(PriceResponse {
        spots: result.spots,
        strikes: result.strikes,
        prices: result.prices,
    })
}

/// Compute the implied-volatility grid for a request, using the default
/// solver configuration (0.2 / 1e-6 / 50 iterations).
///
/// # Errors
///
/// * [`BsGridError::Validation`](crate::BsGridError::Validation) when
///   `price_list` does not match the resolved grid size.
/// * [`BsGridError::Domain`](crate::BsGridError::Domain) for axis values
///   outside the pricing formula's domain.
pub fn calculate_ivs(request: &IvRequest) -> Result<IvResponse> {
    let spots = grid::resolve_axis(request.spots.clone());
    let strikes = grid::resolve_axis(request.strikes.clone());

    let result = grid::implied_vol_grid(
        request.option_type,
        &spots,
        &strikes,
        request.r,
        request.q,
        request.years_to_exp,
        &request.price_list,
        &SolverConfig::default(),
    )?;

    Ok(IvResponse {
        spots: result.spots,
        strikes: result.strikes,
        ivs: result.vols,
    })
}
