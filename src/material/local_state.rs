use crate::base::Vector6;
use serde::{Deserialize, Serialize};

/// Holds the state data of one integration (Gauss) point
///
/// A material point keeps two of these: the converged state of the last accepted
/// load step and the trial state of the current nonlinear iteration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalState {
    /// Holds the stress vector σ
    pub stress: Vector6,

    /// Holds the accumulated plastic strain p (≥ 0)
    pub plastic_strain: f64,

    /// Holds the elastic (vs elastoplastic) flag of the last update
    pub elastic: bool,

    /// Holds the algorithmic plastic multiplier Δγ of the last update
    pub algo_lambda: f64,
}

impl LocalState {
    /// Allocates a new instance with zero stress and plastic strain
    pub fn new() -> Self {
        LocalState {
            stress: Vector6::zeros(),
            plastic_strain: 0.0,
            elastic: true,
            algo_lambda: 0.0,
        }
    }

    /// Resets the algorithmic variables (flag and Δγ)
    pub fn reset_algorithmic_variables(&mut self) {
        self.elastic = true;
        self.algo_lambda = 0.0;
    }
}

impl Default for LocalState {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
