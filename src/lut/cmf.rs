use std::fmt::Display;

use crate::error::FuiError;

const TABLE_NAME: &str = "color-matching";

/// Relative tolerance on the spacing of the color-matching wavelengths.
const SPACING_TOLERANCE: f64 = 1e-6;

/// CIE color-matching functions sampled on an evenly spaced wavelength grid.
///
/// The grid spacing doubles as the integration step of the tristimulus
/// integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct CmfTable {
    wavelengths: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    step: f64,
}

/// Contiguous run of color-matching samples inside a wavelength window.
#[derive(Debug, Clone, Copy)]
pub struct CmfWindow<'a> {
    pub wavelengths: &'a [f64],
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub z: &'a [f64],
    pub step: f64,
}

impl CmfTable {
    pub fn new(
        wavelengths: Vec<f64>,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    ) -> Result<Self, FuiError> {
        let n = wavelengths.len();
        if x.len() != n || y.len() != n || z.len() != n {
            return Err(FuiError::malformed(
                TABLE_NAME,
                format!(
                    "column lengths differ (wavelength {}, x {}, y {}, z {})",
                    n,
                    x.len(),
                    y.len(),
                    z.len()
                ),
            ));
        }

        if n < 2 {
            return Err(FuiError::malformed(
                TABLE_NAME,
                "at least two samples are required",
            ));
        }

        let all_finite = wavelengths
            .iter()
            .chain(&x)
            .chain(&y)
            .chain(&z)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(FuiError::malformed(TABLE_NAME, "values must be finite"));
        }

        let step = wavelengths[1] - wavelengths[0];
        if step <= 0.0 {
            return Err(FuiError::malformed(
                TABLE_NAME,
                "wavelengths must be strictly increasing",
            ));
        }

        for (i, pair) in wavelengths.windows(2).enumerate() {
            let delta = pair[1] - pair[0];
            if delta <= 0.0 {
                return Err(FuiError::malformed(
                    TABLE_NAME,
                    format!(
                        "wavelengths must be strictly increasing (row {}: {} nm after {} nm)",
                        i + 1,
                        pair[1],
                        pair[0]
                    ),
                ));
            }
            if (delta - step).abs() > step * SPACING_TOLERANCE {
                return Err(FuiError::malformed(
                    TABLE_NAME,
                    format!(
                        "wavelengths must be evenly spaced (step {} nm, found {} nm at row {})",
                        step,
                        delta,
                        i + 1
                    ),
                ));
            }
        }

        Ok(Self {
            wavelengths,
            x,
            y,
            z,
            step,
        })
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Grid spacing in nm.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    pub fn min_wavelength(&self) -> f64 {
        self.wavelengths[0]
    }

    pub fn max_wavelength(&self) -> f64 {
        self.wavelengths[self.wavelengths.len() - 1]
    }

    /// Samples whose wavelength lies in `[start, end]`. The result is empty
    /// when no sample falls inside the window.
    pub fn window(&self, start: f64, end: f64) -> CmfWindow<'_> {
        let lo = self.wavelengths.partition_point(|&wl| wl < start);
        let hi = self.wavelengths.partition_point(|&wl| wl <= end).max(lo);

        CmfWindow {
            wavelengths: &self.wavelengths[lo..hi],
            x: &self.x[lo..hi],
            y: &self.y[lo..hi],
            z: &self.z[lo..hi],
            step: self.step,
        }
    }
}

impl CmfWindow<'_> {
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }
}

impl Display for CmfTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CMF table: {} samples, {}-{} nm, step {} nm",
            self.len(),
            self.min_wavelength(),
            self.max_wavelength(),
            self.step
        )
    }
}
