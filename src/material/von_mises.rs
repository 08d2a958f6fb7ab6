use super::{deviator, invariant_j2, sigma_eq, LinElasticity, LocalState};
use crate::base::{Matrix6, ParamVonMises, Vector6, N_VOIGT, SQRT_2_BY_3, SQRT_3_BY_2};
use crate::StrError;

/// Defines the deviatoric projector acting on engineering strains
///
/// `2G P_DEV` is the deviatoric part of the elastic rigidity modulus; hence
/// the shear diagonal holds 1/2 because γ = 2ε.
#[rustfmt::skip]
const P_DEV: [[f64; 6]; 6] = [
    [ 2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 0.0, 0.0, 0.0],
    [-1.0 / 3.0,  2.0 / 3.0, -1.0 / 3.0, 0.0, 0.0, 0.0],
    [-1.0 / 3.0, -1.0 / 3.0,  2.0 / 3.0, 0.0, 0.0, 0.0],
    [ 0.0,        0.0,        0.0,       0.5, 0.0, 0.0],
    [ 0.0,        0.0,        0.0,       0.0, 0.5, 0.0],
    [ 0.0,        0.0,        0.0,       0.0, 0.0, 0.5],
];

/// Implements the von Mises plasticity model with linear isotropic hardening
///
/// The yield function is
///
/// ```text
/// f = σd - (z_ini + H p)
/// ```
///
/// and the stress update is the closed-form radial return (associated flow).
///
/// **Note:** This model works in 3D only (6 Voigt components).
#[derive(Clone, Debug)]
pub struct VonMises {
    /// Holds the parameters
    param: ParamVonMises,

    /// Linear elasticity
    lin_elasticity: LinElasticity,

    /// Shear modulus G
    gg: f64,

    /// Hardening coefficient
    hh: f64,

    /// Initial size of the yield surface
    z_ini: f64,
}

impl VonMises {
    /// Allocates a new instance
    pub fn new(param: &ParamVonMises) -> Result<Self, StrError> {
        param.validate()?;
        let lin_elasticity = LinElasticity::new(param.young, param.poisson)?;
        let (_, gg) = lin_elasticity.get_bulk_shear();
        tracing::debug!(
            young = param.young,
            poisson = param.poisson,
            z_ini = param.z_ini,
            hh = param.hh,
            "von Mises model allocated"
        );
        Ok(VonMises {
            param: *param,
            lin_elasticity,
            gg,
            hh: param.hh,
            z_ini: param.z_ini,
        })
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamVonMises {
        &self.param
    }

    /// Returns the linear elastic model
    pub fn lin_elasticity(&self) -> &LinElasticity {
        &self.lin_elasticity
    }

    /// Indicates that the stiffness matrix is symmetric
    pub fn symmetric_stiffness(&self) -> bool {
        true
    }

    /// Returns the current size of the yield surface z = z_ini + H p
    pub fn yield_stress(&self, plastic_strain: f64) -> f64 {
        self.z_ini + self.hh * plastic_strain
    }

    /// Calculates the yield function f = σd - z
    pub fn yield_function(&self, state: &LocalState) -> f64 {
        sigma_eq(&state.stress) - self.yield_stress(state.plastic_strain)
    }

    /// Updates the stress given the strain increment
    ///
    /// Returns the trial state computed from the converged state; the converged state is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the new plastic strain is smaller than the converged one. This indicates
    /// a corrupted strain history and the computation must be aborted.
    pub fn update_stress(&self, converged: &LocalState, delta_strain: &Vector6) -> Result<LocalState, StrError> {
        // trial stress: σ_trial = σ + D Δε
        let mut trial = *converged;
        trial.reset_algorithmic_variables();
        trial.stress += self.lin_elasticity.get_modulus() * delta_strain;

        // elastic update
        let f_trial = self.yield_function(&trial);
        if f_trial <= 0.0 {
            tracing::trace!(f_trial, "elastic update");
            return Ok(trial);
        }

        // coefficients
        let (gg, hh) = (self.gg, self.hh);
        let sigma_d_trial = sigma_eq(&trial.stress);
        let lambda = f_trial / (3.0 * gg + hh);

        // flow direction: n = s_trial / ‖s_trial‖
        let s_trial = deviator(&trial.stress);
        let n = s_trial * f64::sqrt(1.0 / (2.0 * invariant_j2(&trial.stress)));

        // σ_new = σ_trial - 2 G Δγ √(3/2) n
        trial.stress -= n * (2.0 * gg * lambda * SQRT_3_BY_2);

        // elastoplastic update
        trial.elastic = false;
        trial.algo_lambda = lambda;
        trial.plastic_strain = converged.plastic_strain + lambda;
        if f64::abs(trial.plastic_strain) < f64::abs(converged.plastic_strain) {
            tracing::error!(
                p_converged = converged.plastic_strain,
                p_new = trial.plastic_strain,
                "plastic strain decreased"
            );
            return Err("plastic strain must not decrease");
        }
        tracing::debug!(lambda, sigma_d_trial, p_new = trial.plastic_strain, "plastic return");
        Ok(trial)
    }

    /// Computes the consistent tangent stiffness corresponding to the (trial) state of the last update
    ///
    /// ```text
    /// D_ep = D + v1 P_dev + v2 n ⊗ n
    ///
    /// v1 = -6 G² Δγ / σd_trial
    /// v2 = 6 G² (Δγ / σd_trial - 1 / (3G + H))
    /// ```
    pub fn stiffness(&self, state: &LocalState) -> Matrix6 {
        // handle elastic case
        let dd = self.lin_elasticity.get_modulus();
        if state.elastic {
            return *dd;
        }

        // coefficients
        let (gg, hh) = (self.gg, self.hh);
        let lambda = state.algo_lambda;
        let sigma_d = sigma_eq(&state.stress);
        let sigma_d_trial = sigma_d + lambda * 3.0 * gg;
        let norm_s = sigma_d * SQRT_2_BY_3;
        let v1 = -lambda * 6.0 * gg * gg / sigma_d_trial;
        let v2 = (lambda / sigma_d_trial - 1.0 / (3.0 * gg + hh)) * 6.0 * gg * gg;

        // the return is radial; thus s_new is parallel to s_trial
        let n = deviator(&state.stress) / norm_s;

        // consistent tangent modulus
        let mut dd_ep = *dd;
        for i in 0..N_VOIGT {
            for j in 0..N_VOIGT {
                dd_ep[(i, j)] += v1 * P_DEV[i][j] + v2 * (n[i] * n[j]);
            }
        }
        dd_ep
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
