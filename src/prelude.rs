//! Makes available common structures needed to evaluate material points
//!
//! You may write `use vmplast::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Matrix6, ParamVonMises, SampleParams, Vector6, DEFAULT_TEST_DIR};
pub use crate::material::{deviator, invariant_i1, invariant_i2, invariant_i3, invariant_j2, invariant_j3};
pub use crate::material::{sigma_eq, sigma_m, LinElasticity, LocalState, MaterialPoint, StateSnapshot, VonMises};
pub use crate::material::{PathRecord, StrainPath};
