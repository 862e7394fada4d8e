//! Serializable model configuration.
//!
//! A [`ModelConfig`] is plain data: grid specifications and scalars that can
//! be loaded from any serde format. [`ModelConfig::build`] turns it into
//! validated [`Params`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Grid, GridError, Grids, Params, ParamsError, Preferences};

/// Specification of a non-linearly spaced grid.
///
/// See [`Grid::nonlinear`] for how `phi` shapes the spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub min: f64,
    pub max: f64,
    pub len: usize,

    #[serde(default = "GridSpec::linear_phi")]
    pub phi: f64,
}

impl GridSpec {
    fn linear_phi() -> f64 {
        1.0
    }

    /// Builds the grid described by this spec.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the spec does not describe a valid grid.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::nonlinear(self.min, self.max, self.len, self.phi)
    }
}

/// Configuration for the durables model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of periods `T`.
    pub periods: usize,

    pub preferences: Preferences,

    /// Upper bound on the durable purchase.
    pub n_max: f64,

    /// Convergence tolerance for the durable-purchase search.
    pub tol: f64,

    /// Persistent income grid.
    pub grid_p: GridSpec,

    /// Durable stock grid.
    pub grid_n: GridSpec,

    /// Cash-on-hand grid.
    pub grid_m: GridSpec,

    /// Total resources grid.
    pub grid_x: GridSpec,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let n_max = 3.0;
        let m_max = 10.0;

        Self {
            periods: 5,
            preferences: Preferences::default(),
            n_max,
            tol: 1e-8,
            grid_p: GridSpec {
                min: 1e-4,
                max: 3.0,
                len: 50,
                phi: 1.1,
            },
            grid_n: GridSpec {
                min: 0.0,
                max: n_max,
                len: 50,
                phi: 1.1,
            },
            grid_m: GridSpec {
                min: 0.0,
                max: m_max,
                len: 100,
                phi: 1.1,
            },
            grid_x: GridSpec {
                min: 0.0,
                max: m_max + n_max,
                len: 100,
                phi: 1.1,
            },
        }
    }
}

/// Errors that can occur when building [`Params`] from a [`ModelConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name} grid")]
    Grid {
        name: &'static str,
        #[source]
        source: GridError,
    },

    #[error(transparent)]
    Params(#[from] ParamsError),
}

impl ModelConfig {
    /// Builds the grids and validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first grid that cannot be built, or the
    /// parameter validation failure.
    pub fn build(&self) -> Result<Params, ConfigError> {
        let grid = |name: &'static str, spec: &GridSpec| {
            spec.build()
                .map_err(|source| ConfigError::Grid { name, source })
        };

        let grids = Grids {
            p: grid("persistent income", &self.grid_p)?,
            n: grid("durable stock", &self.grid_n)?,
            m: grid("cash-on-hand", &self.grid_m)?,
            x: grid("total resources", &self.grid_x)?,
        };

        let params = Params::new(self.periods, grids, self.n_max, self.tol, self.preferences)?;
        log::debug!(
            "built params: T={}, Np={}, Nn={}, Nm={}, Nx={}",
            params.periods(),
            params.np(),
            params.nn(),
            params.nm(),
            params.nx(),
        );
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_config_builds() {
        let params = ModelConfig::default().build().expect("defaults are valid");

        assert_eq!(params.periods(), 5);
        assert_eq!((params.np(), params.nn(), params.nm(), params.nx()), (50, 50, 100, 100));
        assert_relative_eq!(params.grid_m()[0], 0.0);
        assert_relative_eq!(params.grid_x()[99], 13.0, epsilon = 1e-12);
    }

    #[test]
    fn loads_from_toml_with_defaults() {
        let text = r"
            periods = 2
            n_max = 10.0

            [preferences]
            rho = 1.0

            [grid_m]
            min = 0.0
            max = 2.0
            len = 3

            [grid_x]
            min = 0.0
            max = 4.0
            len = 2
        ";

        let config: ModelConfig = toml::from_str(text).expect("valid toml");

        assert_eq!(config.periods, 2);
        assert_relative_eq!(config.preferences.rho, 1.0);
        assert_relative_eq!(config.preferences.alpha, 0.9);
        assert_relative_eq!(config.grid_m.phi, 1.0);
        assert_eq!(config.grid_n, ModelConfig::default().grid_n);

        let params = config.build().expect("valid config");
        assert_eq!(params.grid_m().as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(params.grid_x().as_slice(), &[0.0, 4.0]);
    }

    #[test]
    fn names_the_invalid_grid() {
        let config = ModelConfig {
            grid_n: GridSpec {
                min: 1.0,
                max: 0.0,
                len: 10,
                phi: 1.0,
            },
            ..ModelConfig::default()
        };

        assert!(matches!(
            config.build(),
            Err(ConfigError::Grid {
                name: "durable stock",
                ..
            })
        ));
    }

    #[test]
    fn reports_parameter_errors() {
        let config = ModelConfig {
            tol: -1.0,
            ..ModelConfig::default()
        };

        assert_eq!(
            config.build(),
            Err(ConfigError::Params(ParamsError::InvalidTolerance(-1.0)))
        );
    }
}
