use super::{sigma_eq, LocalState, StateSnapshot, VonMises};
use crate::base::{Matrix6, ParamVonMises, Vector6};
use crate::StrError;

/// Implements the von Mises material at a single integration point
///
/// The point holds two explicit sets of values:
///
/// * `converged` -- the state of the last accepted (committed) load step
/// * `trial` -- the tentative state computed by the last call to [MaterialPoint::update_constitutive_response]
///
/// Each nonlinear iteration recomputes the trial state from the converged one.
/// When the enclosing solver converges, [MaterialPoint::commit] promotes the trial
/// values to the converged ones.
///
/// **Note:** A point must be owned by a single integration point; concurrent callers
/// must serialize the calls to `update_constitutive_response`, `commit`, and `restore_from_state`.
#[derive(Clone, Debug)]
pub struct MaterialPoint {
    /// Holds the model
    model: VonMises,

    /// Holds the converged state
    converged: LocalState,

    /// Holds the trial state
    trial: LocalState,

    /// Holds the last strain increment Δε (engineering shear)
    delta_strain: Vector6,

    /// Holds the tangent modulus of the last update (None if not computed yet)
    tangent: Option<Matrix6>,

    /// Indicates that the last update caused plastic flow
    modified: bool,
}

impl MaterialPoint {
    /// Allocates a new instance
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are inadmissible (e.g., poisson = 0.5)
    pub fn new(param: &ParamVonMises) -> Result<Self, StrError> {
        Ok(MaterialPoint {
            model: VonMises::new(param)?,
            converged: LocalState::new(),
            trial: LocalState::new(),
            delta_strain: Vector6::zeros(),
            tangent: None,
            modified: false,
        })
    }

    /// Updates the stress and the tangent modulus given the strain increment
    ///
    /// The increment is measured from the converged state; the result is a trial state
    /// that only becomes permanent after [MaterialPoint::commit].
    ///
    /// # Errors
    ///
    /// Returns an error if the plastic strain would decrease. The computation must be aborted
    /// in this case; the trial state is left untouched.
    pub fn update_constitutive_response(&mut self, delta_strain: &Vector6) -> Result<Vector6, StrError> {
        let trial = self.model.update_stress(&self.converged, delta_strain)?;
        self.tangent = Some(self.model.stiffness(&trial));
        self.delta_strain = *delta_strain;
        self.modified = trial.plastic_strain != self.converged.plastic_strain;
        self.trial = trial;
        Ok(trial.stress)
    }

    /// Returns the tangent modulus of the last update
    ///
    /// If no update has been performed yet, the modulus is computed with a zero strain increment.
    pub fn constitutive_matrix(&mut self) -> Result<Matrix6, StrError> {
        if let Some(dd) = self.tangent {
            return Ok(dd);
        }
        self.update_constitutive_response(&Vector6::zeros())?;
        self.tangent.ok_or("tangent modulus is not available")
    }

    /// Returns the trial (new) stress
    pub fn stresses(&self) -> &Vector6 {
        &self.trial.stress
    }

    /// Returns the converged stress
    pub fn converged_stresses(&self) -> &Vector6 {
        &self.converged.stress
    }

    /// Returns the strain increment of the last update
    pub fn incremental_strains(&self) -> &Vector6 {
        &self.delta_strain
    }

    /// Returns the converged plastic strain
    pub fn plastic_strain(&self) -> f64 {
        self.converged.plastic_strain
    }

    /// Returns the trial (new) plastic strain
    pub fn trial_plastic_strain(&self) -> f64 {
        self.trial.plastic_strain
    }

    /// Returns the plastic multiplier Δγ of the last update
    pub fn algo_lambda(&self) -> f64 {
        self.trial.algo_lambda
    }

    /// Returns the von Mises equivalent stress of the trial stress
    pub fn sigma_eq(&self) -> f64 {
        sigma_eq(&self.trial.stress)
    }

    /// Returns the yield function evaluated at the trial state
    pub fn yield_function(&self) -> f64 {
        self.model.yield_function(&self.trial)
    }

    /// Returns an access to the underlying model
    pub fn model(&self) -> &VonMises {
        &self.model
    }

    /// Returns an access to the converged state
    pub fn converged(&self) -> &LocalState {
        &self.converged
    }

    /// Returns an access to the trial state
    pub fn trial(&self) -> &LocalState {
        &self.trial
    }

    /// Indicates whether the last update changed the plastic strain or not
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Resets the modified flag
    pub fn reset_modified(&mut self) {
        self.modified = false;
    }

    /// Sets the converged and trial stresses to zero
    pub fn clear_stresses(&mut self) {
        self.converged.stress = Vector6::zeros();
        self.trial.stress = Vector6::zeros();
    }

    /// Sets all stresses, strains, and plastic strains to zero (the parameters are kept)
    pub fn clear_state(&mut self) {
        self.converged = LocalState::new();
        self.trial = LocalState::new();
        self.delta_strain = Vector6::zeros();
        self.tangent = None;
        self.modified = false;
    }

    /// Accepts the trial state as the new converged state and returns a snapshot of it
    pub fn commit(&mut self) -> StateSnapshot {
        self.converged = self.trial;
        StateSnapshot::from_state(&self.converged)
    }

    /// Accepts the trial state as the new converged state
    pub fn save_state(&mut self) {
        self.commit();
    }

    /// Returns a snapshot of the converged state
    pub fn create_state(&self) -> StateSnapshot {
        StateSnapshot::from_state(&self.converged)
    }

    /// Restores the converged state from a snapshot
    ///
    /// The trial state is synchronized with the restored values and the tangent
    /// modulus is discarded (it will be recomputed on demand).
    pub fn restore_from_state(&mut self, snapshot: &StateSnapshot) {
        self.converged = LocalState::new();
        self.converged.stress = snapshot.stress();
        self.converged.plastic_strain = snapshot.plastic_strain;
        self.trial = self.converged;
        self.delta_strain = Vector6::zeros();
        self.tangent = None;
        self.modified = false;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
