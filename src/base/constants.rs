use nalgebra::{SMatrix, SVector};

/// Defines a 6-component Voigt vector ordered as {xx, yy, zz, xy, xz, yz}
pub type Vector6 = SVector<f64, 6>;

/// Defines a 6×6 matrix operating on Voigt vectors
pub type Matrix6 = SMatrix<f64, 6, 6>;

/// Defines the number of Voigt components
pub const N_VOIGT: usize = 6;

/// Defines the number of normal components (xx, yy, zz)
pub const N_NORMAL: usize = 3;

/// Defines the Voigt representation of the second-order identity tensor
pub const IDENTITY2: [f64; 6] = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

/// Defines √(3/2)
pub const SQRT_3_BY_2: f64 = 1.224744871391589049098642037352945695982973740328561258640;

/// Defines √(2/3)
pub const SQRT_2_BY_3: f64 = 0.816496580927726032732428024901963797321982493552223376144;

/// Defines 1/3
pub const ONE_BY_3: f64 = 1.0 / 3.0;

/// Defines 2/3
pub const TWO_BY_3: f64 = 2.0 / 3.0;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/vmplast/test";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ONE_BY_3, SQRT_2_BY_3, SQRT_3_BY_2, TWO_BY_3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn constants_are_consistent() {
        assert_abs_diff_eq!(SQRT_3_BY_2, f64::sqrt(1.5), epsilon = 1e-15);
        assert_abs_diff_eq!(SQRT_2_BY_3, f64::sqrt(2.0 / 3.0), epsilon = 1e-15);
        assert_abs_diff_eq!(SQRT_3_BY_2 * SQRT_2_BY_3, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(ONE_BY_3 + TWO_BY_3, 1.0, epsilon = 1e-15);
    }
}
