//! vmplast -- von Mises elastoplastic material-point model
//!
//! This crate implements the stress-update (elastic trial, yield check and radial return)
//! of a rate-independent associative von Mises model with linear isotropic hardening in 3D,
//! together with the consistent tangent operator required by the Newton-Raphson iterations
//! of a finite element solver.
//!
//! # Voigt convention
//!
//! Stress and strain are represented by 6-component vectors ordered as
//! `{xx, yy, zz, xy, xz, yz}`. The stress shear components are the tensor components
//! (σxy, σxz, σyz) whereas the strain shear components are the engineering ones
//! (γxy = 2 εxy, etc.). All invariant formulas in this crate follow this convention;
//! do not mix them with formulas written for Mandel or tensorial shear components.
//!
//! # Example
//!
//! ```
//! use vmplast::prelude::*;
//! use vmplast::StrError;
//!
//! fn main() -> Result<(), StrError> {
//!     let param = SampleParams::param_von_mises();
//!     let mut point = MaterialPoint::new(&param)?;
//!     let delta_strain = Vector6::new(0.002, -0.001, -0.001, 0.0, 0.0, 0.0);
//!     let stress = point.update_constitutive_response(&delta_strain)?;
//!     assert!(sigma_eq(&stress) > 250.0 - 1e-9);
//!     assert!(point.is_modified());
//!     let snapshot = point.commit();
//!     assert!(snapshot.plastic_strain > 0.0);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
