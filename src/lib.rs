//! # BsGrid-Lib: Black-Scholes Pricing and Implied-Volatility Grids
//!
//! `bsgrid-lib` computes European option prices under the Black-Scholes
//! model and, inversely, recovers the implied volatility that reconciles a
//! model price with an observed market price. Both procedures can be
//! applied over the cross product of a spot-price list and a strike-price
//! list, producing row-major matrices that mirror the request order
//! exactly.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: European calls and puts with a continuous
//!   dividend yield; domain violations are typed errors, never silent NaNs
//! - **Newton-Raphson inversion**: vega-derivative iteration with an
//!   in-band `None` for unresolved cells, so batch evaluation never aborts
//!   on a single bad observation
//! - **Grid evaluation**: `spots x strikes` matrices with `values[i][j]`
//!   pinned to `(spots[i], strikes[j])`, order preserved
//! - **Wire contract**: serde request/response types matching the HTTP
//!   boundary, with `S_list`/`K_list` defaulting to `[100.0]`
//!
//! ## Quick Start
//!
//! ```rust
//! use bsgrid_lib::{implied_vol, price_grid, OptionType, SolverConfig};
//!
//! let spots = vec![95.0, 100.0, 105.0];
//! let strikes = vec![90.0, 100.0, 110.0];
//!
//! // Price the whole grid at a flat 20% volatility.
//! let grid = price_grid(OptionType::Call, &spots, &strikes, 0.05, 0.0, 1.0, 0.2)?;
//! assert_eq!(grid.shape(), (3, 3));
//!
//! // Feed the ATM model price back through the solver to recover sigma.
//! let iv = implied_vol(
//!     OptionType::Call,
//!     grid.prices[1][1],
//!     100.0,
//!     100.0,
//!     0.05,
//!     0.0,
//!     1.0,
//!     &SolverConfig::default(),
//! )?;
//! assert!((iv.unwrap() - 0.2).abs() < 1e-4);
//! # Ok::<(), bsgrid_lib::BsGridError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod api;
pub mod error;
pub mod grid;
pub mod models;
pub mod solver;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error taxonomy
pub use error::{BsGridError, Result};

// Pricing engine
pub use models::bs::{price, vega, OptionType};

// Implied-volatility solver
pub use solver::{implied_vol, SolverConfig};

// Grid evaluation
pub use grid::{
    implied_vol_grid, price_grid, resolve_axis, ImpliedVolGrid, PriceGrid, DEFAULT_AXIS_VALUE,
};
