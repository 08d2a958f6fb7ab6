//! Implements the von Mises material model and the material-point container

mod invariants;
mod lin_elasticity;
mod local_state;
mod material_point;
mod state_snapshot;
mod strain_path;
mod von_mises;
pub use crate::material::invariants::*;
pub use crate::material::lin_elasticity::*;
pub use crate::material::local_state::*;
pub use crate::material::material_point::*;
pub use crate::material::state_snapshot::*;
pub use crate::material::strain_path::*;
pub use crate::material::von_mises::*;
