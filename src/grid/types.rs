//! Result containers for grid evaluation.
//!
//! Both grids are plain value objects: they own their axes and their cells,
//! are created per evaluation and never mutated afterwards.

/// Price matrix over the cross product of a spot axis and a strike axis.
///
/// `prices[i][j]` is the price for `(spots[i], strikes[j])`. Both axes keep
/// the caller-supplied order exactly - no sorting, no deduplication.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    pub spots: Vec<f64>,
    pub strikes: Vec<f64>,
    pub prices: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Grid dimensions as `(|spots|, |strikes|)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.spots.len(), self.strikes.len())
    }
}

/// Implied-volatility matrix over the same cross product as [`PriceGrid`].
///
/// A `None` cell marks an observed price the solver could not reconcile
/// with any volatility; sibling cells are unaffected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolGrid {
    pub spots: Vec<f64>,
    pub strikes: Vec<f64>,
    pub vols: Vec<Vec<Option<f64>>>,
}

impl ImpliedVolGrid {
    /// Grid dimensions as `(|spots|, |strikes|)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.spots.len(), self.strikes.len())
    }

    /// Number of cells that failed to resolve.
    pub fn unresolved_count(&self) -> usize {
        self.vols
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_none()).count())
            .sum()
    }
}
