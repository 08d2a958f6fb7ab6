//! Invariants and deviator of a stress vector in Voigt notation
//!
//! The input vectors hold the tensor components `{σxx, σyy, σzz, σxy, σxz, σyz}`.
//! Shear terms are therefore **not** doubled in the formulas below; the only
//! consumer of these quantities inside the crate is the von Mises equivalent
//! stress `σd = √(3 J2)`, which follows the same convention.

use crate::base::{Vector6, IDENTITY2, N_NORMAL, ONE_BY_3};
use nalgebra::Matrix3;

/// Calculates the first invariant I1 = σxx + σyy + σzz
pub fn invariant_i1(sigma: &Vector6) -> f64 {
    sigma[0] + sigma[1] + sigma[2]
}

/// Calculates the mean stress σm = I1 / 3
pub fn sigma_m(sigma: &Vector6) -> f64 {
    invariant_i1(sigma) / 3.0
}

/// Calculates the second invariant I2
///
/// ```text
/// I2 = σxx σyy + σyy σzz + σzz σxx - σxy² - σxz² - σyz²
/// ```
pub fn invariant_i2(sigma: &Vector6) -> f64 {
    let (sxx, syy, szz) = (sigma[0], sigma[1], sigma[2]);
    let (sxy, sxz, syz) = (sigma[3], sigma[4], sigma[5]);
    sxx * syy + syy * szz + szz * sxx - sxy * sxy - sxz * sxz - syz * syz
}

/// Calculates the third invariant I3 = det(σ)
///
/// ```text
/// I3 = σxx σyy σzz + 2 σxy σyz σxz - σxx σyz² - σyy σxz² - σzz σxy²
/// ```
pub fn invariant_i3(sigma: &Vector6) -> f64 {
    let (sxx, syy, szz) = (sigma[0], sigma[1], sigma[2]);
    let (sxy, sxz, syz) = (sigma[3], sigma[4], sigma[5]);
    sxx * syy * szz + 2.0 * sxy * syz * sxz - sxx * syz * syz - syy * sxz * sxz - szz * sxy * sxy
}

/// Calculates the deviatoric stress s = σ - σm I
pub fn deviator(sigma: &Vector6) -> Vector6 {
    let mean = sigma_m(sigma);
    let mut s = *sigma;
    for i in 0..N_NORMAL {
        s[i] -= mean * IDENTITY2[i];
    }
    s
}

/// Calculates the second invariant of the deviatoric stress
///
/// ```text
/// J2 = ((σxx-σyy)² + (σyy-σzz)² + (σxx-σzz)²)/6 + σxy² + σxz² + σyz²
/// ```
pub fn invariant_j2(sigma: &Vector6) -> f64 {
    let (sxx, syy, szz) = (sigma[0], sigma[1], sigma[2]);
    let (sxy, sxz, syz) = (sigma[3], sigma[4], sigma[5]);
    ((sxx - syy) * (sxx - syy) + (syy - szz) * (syy - szz) + (sxx - szz) * (sxx - szz)) / 6.0
        + sxy * sxy
        + sxz * sxz
        + syz * syz
}

/// Calculates the third invariant of the deviatoric stress
///
/// ```text
/// J3 = 2/27 I1³ - 1/3 I1 I2 + I3
/// ```
pub fn invariant_j3(sigma: &Vector6) -> f64 {
    let i1 = invariant_i1(sigma);
    let i2 = invariant_i2(sigma);
    let i3 = invariant_i3(sigma);
    2.0 * i1 * i1 * i1 / 27.0 - ONE_BY_3 * i1 * i2 + i3
}

/// Calculates the von Mises equivalent stress σd = √(3 J2)
pub fn sigma_eq(sigma: &Vector6) -> f64 {
    f64::sqrt(3.0 * invariant_j2(sigma))
}

/// Returns the 3×3 symmetric matrix corresponding to the Voigt vector
#[rustfmt::skip]
pub fn to_matrix3(sigma: &Vector6) -> Matrix3<f64> {
    Matrix3::new(
        sigma[0], sigma[3], sigma[4],
        sigma[3], sigma[1], sigma[5],
        sigma[4], sigma[5], sigma[2],
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
