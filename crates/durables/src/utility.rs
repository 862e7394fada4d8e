use serde::{Deserialize, Serialize};

/// Per-period utility over non-durable consumption `c` and durable stock `d`.
///
/// Implementations are expected to be concave and increasing in both
/// arguments for non-negative inputs. The terminal-period solver never calls
/// `utility` with zero total resources; zero consumption is handled as a
/// corner before utility is evaluated.
///
/// Any `Fn(f64, f64) -> f64 + Sync` closure is a `Utility`, which keeps tests
/// and alternative specifications lightweight.
pub trait Utility: Sync {
    fn utility(&self, c: f64, d: f64) -> f64;
}

impl<F> Utility for F
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    fn utility(&self, c: f64, d: f64) -> f64 {
        self(c, d)
    }
}

/// Household preferences: CRRA utility over a Cobb-Douglas aggregate.
///
/// ```text
/// u(c, d) = (c^α · (d + d̲)^(1-α))^(1-ρ) / (1-ρ)
/// ```
///
/// The durable stock is shifted by `d_ubar` so that utility stays finite for
/// households holding no durables. At `rho == 1` the logarithmic limit is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Relative risk aversion.
    pub rho: f64,

    /// Cobb-Douglas weight on non-durable consumption.
    pub alpha: f64,

    /// Additive shift of the durable stock.
    pub d_ubar: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            rho: 2.0,
            alpha: 0.9,
            d_ubar: 1e-2,
        }
    }
}

impl Utility for Preferences {
    fn utility(&self, c: f64, d: f64) -> f64 {
        let d_total = d + self.d_ubar;
        let aggregate = c.powf(self.alpha) * d_total.powf(1.0 - self.alpha);

        if (self.rho - 1.0).abs() < f64::EPSILON {
            aggregate.ln()
        } else {
            aggregate.powf(1.0 - self.rho) / (1.0 - self.rho)
        }
    }
}
