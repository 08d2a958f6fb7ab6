use crate::base::{Matrix6, N_NORMAL, N_VOIGT};
use crate::StrError;

/// Implements the isotropic linear elastic relations in Voigt notation
///
/// The rigidity modulus `D` maps engineering strains to stresses:
///
/// ```text
///     ┌                                    ┐
///     │ λ+2μ   λ     λ     0     0     0   │
///     │  λ    λ+2μ   λ     0     0     0   │
/// D = │  λ     λ    λ+2μ   0     0     0   │
///     │  0     0     0     μ     0     0   │
///     │  0     0     0     0     μ     0   │
///     │  0     0     0     0     0     μ   │
///     └                                    ┘
/// ```
#[derive(Clone, Debug)]
pub struct LinElasticity {
    /// Young's modulus
    young: f64,

    /// Poisson's coefficient
    poisson: f64,

    /// Lamé's first parameter λ
    lambda: f64,

    /// Shear modulus G = μ
    gg: f64,

    /// Bulk modulus K
    kk: f64,

    /// Rigidity modulus D
    dd: Matrix6,
}

impl LinElasticity {
    /// Allocates a new instance
    ///
    /// **Note:** `poisson = 0.5` (incompressible solid) yields a singular modulus and is rejected.
    pub fn new(young: f64, poisson: f64) -> Result<Self, StrError> {
        if poisson == 0.5 {
            return Err("poisson must not be equal to 0.5");
        }
        let gg = young / (2.0 * (1.0 + poisson));
        let lambda = young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson));
        let kk = young / (3.0 * (1.0 - 2.0 * poisson));
        let mut dd = Matrix6::zeros();
        for i in 0..N_NORMAL {
            for j in 0..N_NORMAL {
                dd[(i, j)] = lambda;
            }
            dd[(i, i)] = lambda + 2.0 * gg;
        }
        for i in N_NORMAL..N_VOIGT {
            dd[(i, i)] = gg;
        }
        Ok(LinElasticity {
            young,
            poisson,
            lambda,
            gg,
            kk,
            dd,
        })
    }

    /// Returns the Young's modulus
    pub fn young(&self) -> f64 {
        self.young
    }

    /// Returns the Poisson's coefficient
    pub fn poisson(&self) -> f64 {
        self.poisson
    }

    /// Returns Lamé's first parameter λ
    pub fn get_lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the bulk (K) and shear (G) moduli
    pub fn get_bulk_shear(&self) -> (f64, f64) {
        (self.kk, self.gg)
    }

    /// Returns an access to the rigidity modulus D
    pub fn get_modulus(&self) -> &Matrix6 {
        &self.dd
    }

    /// Calculates the compliance modulus C = D⁻¹
    ///
    /// ```text
    /// ε = C σ
    /// ```
    pub fn calc_compliance(&self) -> Matrix6 {
        let mut cc = Matrix6::zeros();
        for i in 0..N_NORMAL {
            for j in 0..N_NORMAL {
                cc[(i, j)] = -self.poisson / self.young;
            }
            cc[(i, i)] = 1.0 / self.young;
        }
        for i in N_NORMAL..N_VOIGT {
            cc[(i, i)] = 1.0 / self.gg;
        }
        cc
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
