/// Tuning knobs for the Newton-Raphson implied-volatility solver.
///
/// The defaults match the published request contract: starting guess 0.2,
/// absolute price tolerance 1e-6, at most 50 iterations per cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Starting volatility for the iteration.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_vol"))]
    pub initial_vol: f64,

    /// Stopping criterion: |model price - observed price| below this value.
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: f64,

    /// Iteration budget per cell; bounds worst-case latency instead of a
    /// wall-clock timeout.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_vol: default_initial_vol(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SolverConfig {
    /// Loose tolerance and a small budget, for quick validation runs.
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 20,
            ..Self::default()
        }
    }

    /// Tight tolerance with a larger budget, for research-grade fits.
    pub fn high_precision() -> Self {
        Self {
            tolerance: 1e-9,
            max_iterations: 100,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML; absent keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

fn default_initial_vol() -> f64 {
    0.2
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    50
}
