use approx::assert_abs_diff_eq;
use vmplast::prelude::*;
use vmplast::StrError;

// von Mises material point driven by elastic and plastic increments
//
// TEST GOAL
//
// Verifies the elastic trial, the return mapping to the hardened yield
// surface, and the irreversibility of the accumulated plastic strain
// along a load-unload-reload sequence.
//
// CONFIGURATION AND PARAMETERS
//
// * Young: E = 210000, Poisson: ν = 0.3
// * Yield stress: z_ini = 250, Hardening: H = 1000
// * Increments are deviatoric (uniaxial-like) plus a shear component

const Z_INI: f64 = 250.0;
const HH: f64 = 1000.0;

fn deviatoric_increment(a: f64) -> Vector6 {
    Vector6::new(2.0 * a, -a, -a, 0.5 * a, 0.0, 0.0)
}

#[test]
fn test_von_mises_end_to_end() -> Result<(), StrError> {
    let param = SampleParams::param_von_mises();
    let mut point = MaterialPoint::new(&param)?;
    let dde = *point.model().lin_elasticity().get_modulus();

    // elastic increment
    let delta_strain = deviatoric_increment(2e-4);
    let stress = point.update_constitutive_response(&delta_strain)?;
    assert!(sigma_eq(&stress) < Z_INI);
    assert_eq!(stress, dde * delta_strain);
    assert_eq!(point.trial_plastic_strain(), 0.0);
    assert!(!point.is_modified());
    assert_eq!(point.constitutive_matrix()?, dde);
    point.commit();

    // plastic increment
    let delta_strain = deviatoric_increment(1e-3);
    let trial_stress = point.converged_stresses() + dde * delta_strain;
    assert!(sigma_eq(&trial_stress) > Z_INI);
    let stress = point.update_constitutive_response(&delta_strain)?;
    let p_new = point.trial_plastic_strain();
    assert!(p_new > 0.0);
    assert!(point.is_modified());
    assert_abs_diff_eq!(sigma_eq(&stress), Z_INI + HH * p_new, epsilon = 1e-9);
    let dd = point.constitutive_matrix()?;
    assert!(dd != dde);
    assert_eq!(dd, dd.transpose());
    assert!((dd - dde).norm() > 1.0);
    point.commit();
    assert_eq!(point.plastic_strain(), p_new);
    Ok(())
}

#[test]
fn test_von_mises_load_unload_reload() -> Result<(), StrError> {
    let param = SampleParams::param_von_mises();
    let mut point = MaterialPoint::new(&param)?;
    let mut p_previous = 0.0;

    // loading, unloading, reverse loading, and reloading
    let amplitudes = [1e-3, 1e-3, -1e-3, -1e-3, -1e-3, -1e-3, 1e-3, 1e-3, 1e-3, 1e-3];
    let mut n_plastic = 0;
    for a in amplitudes {
        point.update_constitutive_response(&deviatoric_increment(a))?;
        let p_new = point.trial_plastic_strain();
        assert!(p_new >= p_previous);
        assert!(point.yield_function() <= 1e-9);
        if point.is_modified() {
            n_plastic += 1;
            assert_abs_diff_eq!(point.sigma_eq(), Z_INI + HH * p_new, epsilon = 1e-9);
        } else {
            assert_eq!(p_new, p_previous);
        }
        point.commit();
        p_previous = point.plastic_strain();
    }
    assert!(n_plastic >= 4);
    assert!(n_plastic < amplitudes.len());
    Ok(())
}

#[test]
fn test_von_mises_hydrostatic_loading_is_elastic() -> Result<(), StrError> {
    let param = SampleParams::param_von_mises();
    let mut point = MaterialPoint::new(&param)?;
    let delta_strain = Vector6::new(-0.05, -0.05, -0.05, 0.0, 0.0, 0.0);
    let stress = point.update_constitutive_response(&delta_strain)?;
    let (kk, _) = point.model().lin_elasticity().get_bulk_shear();
    assert!(!point.is_modified());
    assert_abs_diff_eq!(sigma_m(&stress), kk * (-0.15), epsilon = 1e-8);
    assert_abs_diff_eq!(sigma_eq(&stress), 0.0, epsilon = 1e-8);
    assert_eq!(point.constitutive_matrix()?, *point.model().lin_elasticity().get_modulus());
    Ok(())
}

#[test]
fn test_von_mises_construction_guard() {
    let mut param = SampleParams::param_von_mises();
    param.poisson = 0.5;
    assert_eq!(MaterialPoint::new(&param).err(), Some("poisson must not be equal to 0.5"));
    param.poisson = 0.49999;
    let mut point = MaterialPoint::new(&param).unwrap();
    let dd = point.constitutive_matrix().unwrap();
    assert!(dd.iter().all(|v| v.is_finite()));
    assert_eq!(dd, dd.transpose());
}
