use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds parameters for the von Mises elastoplastic model with linear isotropic hardening
///
/// The yield function is:
///
/// ```text
/// f = σd - (z_ini + H p)
/// ```
///
/// where `σd = √(3 J2)` is the von Mises equivalent stress and `p` is the accumulated plastic strain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamVonMises {
    /// Young's modulus E
    pub young: f64,

    /// Poisson's coefficient ν
    pub poisson: f64,

    /// Initial size of the yield surface (yield stress σy)
    pub z_ini: f64,

    /// Linear isotropic hardening modulus H
    pub hh: f64,
}

impl ParamVonMises {
    /// Checks whether the parameters describe an admissible material or not
    ///
    /// **Note:** ν = 0.5 (incompressible solid) renders a singular elastic modulus and is rejected.
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.young.is_finite() || !self.poisson.is_finite() || !self.z_ini.is_finite() || !self.hh.is_finite() {
            return Err("parameters must be finite");
        }
        if self.young <= 0.0 {
            return Err("young must be > 0.0");
        }
        if self.poisson == 0.5 {
            return Err("poisson must not be equal to 0.5");
        }
        if self.poisson <= -1.0 || self.poisson > 0.5 {
            return Err("poisson must satisfy -1.0 < poisson < 0.5");
        }
        if self.z_ini <= 0.0 {
            return Err("z_ini must be > 0.0");
        }
        if self.hh < 0.0 {
            return Err("hh must be ≥ 0.0");
        }
        Ok(())
    }

    /// Parses the parameters from a JSON string and validates them
    pub fn from_json_str(json: &str) -> Result<Self, StrError> {
        let param: ParamVonMises = serde_json::from_str(json).map_err(|_| "cannot parse JSON string")?;
        param.validate()?;
        Ok(param)
    }

    /// Reads a JSON file with the parameters and validates them
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
        let param: ParamVonMises = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        param.validate()?;
        Ok(param)
    }
}

impl fmt::Display for ParamVonMises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "von Mises parameters")?;
        writeln!(f, "====================")?;
        writeln!(f, "young = {:?}", self.young)?;
        writeln!(f, "poisson = {:?}", self.poisson)?;
        writeln!(f, "z_ini = {:?}", self.z_ini)?;
        writeln!(f, "hh = {:?}", self.hh)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
