use super::LocalState;
use crate::base::Vector6;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds an immutable snapshot of the converged state of a material point
///
/// The snapshot is a small record of named scalars that the enclosing solver may
/// store, serialize, and later hand back to [crate::material::MaterialPoint::restore_from_state].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Accumulated plastic strain p
    pub plastic_strain: f64,

    /// σxx
    pub sxx: f64,

    /// σyy
    pub syy: f64,

    /// σzz
    pub szz: f64,

    /// σxy
    pub sxy: f64,

    /// σxz
    pub sxz: f64,

    /// σyz
    pub syz: f64,
}

impl StateSnapshot {
    /// Holds the names of the values, in the order returned by [StateSnapshot::values]
    pub const NAMES: [&'static str; 7] = ["plastic_strain", "sxx", "syy", "szz", "sxy", "sxz", "syz"];

    /// Allocates a new instance from a local state
    pub fn from_state(state: &LocalState) -> Self {
        let s = &state.stress;
        StateSnapshot {
            plastic_strain: state.plastic_strain,
            sxx: s[0],
            syy: s[1],
            szz: s[2],
            sxy: s[3],
            sxz: s[4],
            syz: s[5],
        }
    }

    /// Allocates a new instance from values ordered as in [StateSnapshot::NAMES]
    pub fn from_values(values: &[f64; 7]) -> Self {
        StateSnapshot {
            plastic_strain: values[0],
            sxx: values[1],
            syy: values[2],
            szz: values[3],
            sxy: values[4],
            sxz: values[5],
            syz: values[6],
        }
    }

    /// Returns the values ordered as in [StateSnapshot::NAMES]
    pub fn values(&self) -> [f64; 7] {
        [
            self.plastic_strain,
            self.sxx,
            self.syy,
            self.szz,
            self.sxy,
            self.sxz,
            self.syz,
        ]
    }

    /// Returns the value corresponding to a name
    pub fn get(&self, name: &str) -> Option<f64> {
        let index = StateSnapshot::NAMES.iter().position(|n| *n == name)?;
        Some(self.values()[index])
    }

    /// Returns the stress vector
    pub fn stress(&self) -> Vector6 {
        Vector6::new(self.sxx, self.syy, self.szz, self.sxy, self.sxz, self.syz)
    }

    /// Reads a JSON file with the snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let snapshot = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(snapshot)
    }

    /// Writes a JSON file with the snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
