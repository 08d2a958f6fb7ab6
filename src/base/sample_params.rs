use super::ParamVonMises;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a steel-like von Mises material with linear hardening
    ///
    /// E = 210000, ν = 0.3, σy = 250, H = 1000 (MPa)
    pub fn param_von_mises() -> ParamVonMises {
        ParamVonMises {
            young: 210000.0,
            poisson: 0.3,
            z_ini: 250.0,
            hh: 1000.0,
        }
    }

    /// Returns sample parameters for a perfectly plastic von Mises material (H = 0)
    pub fn param_von_mises_perfect() -> ParamVonMises {
        ParamVonMises {
            hh: 0.0,
            ..SampleParams::param_von_mises()
        }
    }

    /// Returns the parameters used in the plane-strain verification of de Souza Neto et al. (2008)
    pub fn param_von_mises_hyplas() -> ParamVonMises {
        ParamVonMises {
            young: 1500.0,
            poisson: 0.25,
            z_ini: 9.0,
            hh: 800.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleParams;

    #[test]
    fn sample_params_are_valid() {
        SampleParams::param_von_mises().validate().unwrap();
        SampleParams::param_von_mises_perfect().validate().unwrap();
        SampleParams::param_von_mises_hyplas().validate().unwrap();
        assert_eq!(SampleParams::param_von_mises_perfect().hh, 0.0);
        assert_eq!(SampleParams::param_von_mises_perfect().z_ini, 250.0);
    }
}
