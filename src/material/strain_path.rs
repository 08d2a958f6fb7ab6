use super::{sigma_eq, LinElasticity, MaterialPoint};
use crate::base::{Matrix6, Vector6};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds a sequence of total strain states driving a material point
///
/// Stress states may also be given; they are converted to strains using linear elasticity.
pub struct StrainPath {
    /// Holds the linear elastic compliance modulus
    ///
    /// ```text
    /// ε = C σ
    /// ```
    cc: Matrix6,

    /// Holds the strain states
    pub strains: Vec<Vector6>,

    /// Holds all Δε
    pub deltas_strain: Vec<Vector6>,
}

/// Holds the results at one state along a strain path
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PathRecord {
    /// Total strain ε
    pub strain: Vector6,

    /// Stress σ
    pub stress: Vector6,

    /// Accumulated plastic strain p
    pub plastic_strain: f64,

    /// von Mises equivalent stress σd
    pub sigma_eq: f64,

    /// Indicates an elastic (vs elastoplastic) update
    pub elastic: bool,
}

impl StrainPath {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus to calculate strain from stress
    /// * `poisson` -- Poisson's coefficient to calculate strain from stress
    pub fn new(young: f64, poisson: f64) -> Result<Self, StrError> {
        let ela = LinElasticity::new(young, poisson)?;
        Ok(StrainPath {
            cc: ela.calc_compliance(),
            strains: Vec::new(),
            deltas_strain: Vec::new(),
        })
    }

    /// Generates a linear path from zero to the final strain
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus to calculate strain from stress
    /// * `poisson` -- Poisson's coefficient to calculate strain from stress
    /// * `n_increments` -- number of increments (≥ 1)
    /// * `strain_final` -- the last strain state
    pub fn new_linear(young: f64, poisson: f64, n_increments: usize, strain_final: &Vector6) -> Result<Self, StrError> {
        if n_increments < 1 {
            return Err("n_increments must be ≥ 1");
        }
        let mut path = StrainPath::new(young, poisson)?;
        path.push_strain(&Vector6::zeros());
        for i in 0..n_increments {
            let m = (i + 1) as f64 / (n_increments as f64);
            path.push_strain(&(strain_final * m));
        }
        Ok(path)
    }

    /// Appends a new strain state
    pub fn push_strain(&mut self, strain: &Vector6) -> &mut Self {
        if let Some(last) = self.strains.last() {
            self.deltas_strain.push(strain - last);
        }
        self.strains.push(*strain);
        self
    }

    /// Appends a new stress state (converted to strain using linear elasticity)
    pub fn push_stress(&mut self, stress: &Vector6) -> &mut Self {
        let strain = self.cc * stress;
        self.push_strain(&strain)
    }

    /// Drives the material point along the path, committing every increment
    ///
    /// Returns the records of all states, including the initial one.
    pub fn follow(&self, point: &mut MaterialPoint) -> Result<Vec<PathRecord>, StrError> {
        let first = match self.strains.first() {
            Some(strain) => strain,
            None => return Err("the path must have at least one strain state"),
        };
        let mut records = Vec::with_capacity(self.strains.len());
        let converged = point.converged();
        records.push(PathRecord {
            strain: *first,
            stress: converged.stress,
            plastic_strain: converged.plastic_strain,
            sigma_eq: sigma_eq(&converged.stress),
            elastic: converged.elastic,
        });
        for (i, delta_strain) in self.deltas_strain.iter().enumerate() {
            let stress = point.update_constitutive_response(delta_strain)?;
            point.commit();
            tracing::trace!(step = i + 1, sigma_eq = point.sigma_eq(), "strain path");
            records.push(PathRecord {
                strain: self.strains[i + 1],
                stress,
                plastic_strain: point.plastic_strain(),
                sigma_eq: sigma_eq(&stress),
                elastic: point.trial().elastic,
            });
        }
        Ok(records)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StrainPath;
    use crate::base::{SampleParams, Vector6};
    use crate::material::MaterialPoint;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_linear_captures_errors() {
        let eps = Vector6::new(1e-3, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            StrainPath::new_linear(1000.0, 0.25, 0, &eps).err(),
            Some("n_increments must be ≥ 1")
        );
        assert_eq!(
            StrainPath::new_linear(1000.0, 0.5, 1, &eps).err(),
            Some("poisson must not be equal to 0.5")
        );
    }

    #[test]
    fn new_linear_works() {
        let eps = Vector6::new(4e-3, -2e-3, 0.0, 1e-3, 0.0, 0.0);
        let path = StrainPath::new_linear(1000.0, 0.25, 4, &eps).unwrap();
        assert_eq!(path.strains.len(), 5);
        assert_eq!(path.deltas_strain.len(), 4);
        assert_eq!(path.strains[0], Vector6::zeros());
        assert_abs_diff_eq!(path.strains[4], eps, epsilon = 1e-18);
        for delta in &path.deltas_strain {
            assert_abs_diff_eq!(*delta, eps * 0.25, epsilon = 1e-15);
        }
    }

    #[test]
    fn push_stress_works() {
        let mut path = StrainPath::new(1000.0, 0.25).unwrap();
        path.push_stress(&Vector6::zeros())
            .push_stress(&Vector6::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0))
            .push_stress(&Vector6::new(1.0, 0.0, 0.0, 0.4, 0.0, 0.0));
        assert_eq!(path.strains.len(), 3);
        assert_abs_diff_eq!(path.strains[1][0], 1e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(path.strains[1][1], -0.25e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(path.deltas_strain[1][3], 0.4 / 400.0, epsilon = 1e-15);
    }

    #[test]
    fn follow_captures_errors() {
        let path = StrainPath::new(1000.0, 0.25).unwrap();
        let mut point = MaterialPoint::new(&SampleParams::param_von_mises()).unwrap();
        assert_eq!(
            path.follow(&mut point).err(),
            Some("the path must have at least one strain state")
        );
    }

    #[test]
    fn follow_works() {
        let param = SampleParams::param_von_mises();
        let eps = Vector6::new(6e-3, -3e-3, -3e-3, 0.0, 0.0, 0.0);
        let path = StrainPath::new_linear(param.young, param.poisson, 10, &eps).unwrap();
        let mut point = MaterialPoint::new(&param).unwrap();
        let records = path.follow(&mut point).unwrap();
        assert_eq!(records.len(), 11);
        assert!(records[0].elastic);
        assert_eq!(records[0].plastic_strain, 0.0);
        assert!(records[1].elastic);
        assert!(!records[10].elastic);
        for i in 1..records.len() {
            assert!(records[i].plastic_strain >= records[i - 1].plastic_strain);
            if !records[i].elastic {
                let z = param.z_ini + param.hh * records[i].plastic_strain;
                assert_abs_diff_eq!(records[i].sigma_eq, z, epsilon = 1e-9);
            }
        }
        assert_eq!(records[10].plastic_strain, point.plastic_strain());
        let json = serde_json::to_string(&records[10]).unwrap();
        assert!(json.contains("\"elastic\":false"));
    }
}
