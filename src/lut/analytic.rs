//! CIE 1931 2° color-matching functions from the multi-lobe Gaussian fit of
//! Wyman, Sloan and Shirley, "Simple Analytic Approximations to the CIE XYZ
//! Color Matching Functions" (JCGT 2013).
//!
//! The fit stays within a few percent of the tabulated functions and is used
//! whenever no color-matching table is configured.

use crate::error::FuiError;
use crate::lut::cmf::CmfTable;

pub const DEFAULT_START: f64 = 380.0;
pub const DEFAULT_END: f64 = 780.0;
pub const DEFAULT_STEP: f64 = 5.0;

/// Largest number of samples a generated table may hold.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Piecewise Gaussian with different inverse widths on each side of the mean.
fn lobe(lambda: f64, mean: f64, inv_left: f64, inv_right: f64) -> f64 {
    let t = (lambda - mean) * if lambda < mean { inv_left } else { inv_right };
    (-0.5 * t * t).exp()
}

pub fn x_bar(lambda: f64) -> f64 {
    0.362 * lobe(lambda, 442.0, 0.0624, 0.0374) + 1.056 * lobe(lambda, 599.8, 0.0264, 0.0323)
        - 0.065 * lobe(lambda, 501.1, 0.0490, 0.0382)
}

pub fn y_bar(lambda: f64) -> f64 {
    0.821 * lobe(lambda, 568.8, 0.0213, 0.0247) + 0.286 * lobe(lambda, 530.9, 0.0613, 0.0322)
}

pub fn z_bar(lambda: f64) -> f64 {
    1.217 * lobe(lambda, 437.0, 0.0845, 0.0278) + 0.681 * lobe(lambda, 459.0, 0.0385, 0.0725)
}

/// Samples the fit on `start, start + step, ..., end`.
pub fn cie1931_table(start: f64, end: f64, step: f64) -> Result<CmfTable, FuiError> {
    let bounds_ok = start.is_finite() && end.is_finite() && end > start;
    if !bounds_ok || !step.is_finite() || step <= 0.0 {
        return Err(FuiError::malformed(
            "color-matching",
            format!("cannot sample {}-{} nm with a {} nm step", start, end, step),
        ));
    }

    let intervals = ((end - start) / step).round();
    if intervals >= MAX_SAMPLES as f64 {
        return Err(FuiError::malformed(
            "color-matching",
            format!(
                "a {} nm step over {}-{} nm exceeds {} samples",
                step, start, end, MAX_SAMPLES
            ),
        ));
    }
    let count = intervals as usize + 1;
    let wavelengths: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();

    let x = wavelengths.iter().map(|&wl| x_bar(wl)).collect();
    let y = wavelengths.iter().map(|&wl| y_bar(wl)).collect();
    let z = wavelengths.iter().map(|&wl| z_bar(wl)).collect();

    CmfTable::new(wavelengths, x, y, z)
}

/// 380-780 nm at 5 nm.
pub fn cie1931_default() -> Result<CmfTable, FuiError> {
    cie1931_table(DEFAULT_START, DEFAULT_END, DEFAULT_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_peaks_match_cie_tables() {
        // Tabulated CIE 1931 values: x(600) = 1.0622, y(555) = 1.0002, z(445) = 1.7826
        assert_abs_diff_eq!(x_bar(600.0), 1.0622, epsilon = 0.03);
        assert_abs_diff_eq!(y_bar(555.0), 1.0002, epsilon = 0.03);
        assert_abs_diff_eq!(z_bar(445.0), 1.7826, epsilon = 0.06);
    }

    #[test]
    fn test_default_grid() {
        let table = cie1931_default().unwrap();
        assert_eq!(table.len(), 81);
        assert_eq!(table.step(), 5.0);
        assert_eq!(table.min_wavelength(), 380.0);
        assert_eq!(table.max_wavelength(), 780.0);
    }

    #[test]
    fn test_invalid_grid() {
        assert!(cie1931_table(700.0, 400.0, 5.0).is_err());
        assert!(cie1931_table(400.0, 700.0, 0.0).is_err());
        assert!(cie1931_table(400.0, 700.0, f64::NAN).is_err());
        assert!(cie1931_table(400.0, 700.0, 1e-300).is_err());
        assert!(cie1931_table(0.0, f64::MAX, 1.0).is_err());
    }
}
