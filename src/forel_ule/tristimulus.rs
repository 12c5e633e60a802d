use ndarray::{ArrayD, ArrayView1, Axis, IxDyn, Zip};

use crate::error::FuiError;
use crate::lut::CmfWindow;

/// CIE X, Y and Z per pixel.
#[derive(Debug, Clone)]
pub struct Tristimulus {
    pub x: ArrayD<f64>,
    pub y: ArrayD<f64>,
    pub z: ArrayD<f64>,
}

/// Rectangle-rule integral of one pixel's resampled spectrum against the
/// color-matching functions.
pub fn integrate_pixel(spectrum: ArrayView1<'_, f64>, cmf: &CmfWindow<'_>) -> [f64; 3] {
    let mut sums = [0.0; 3];
    for (k, &r) in spectrum.iter().enumerate() {
        sums[0] += r * cmf.x[k];
        sums[1] += r * cmf.y[k];
        sums[2] += r * cmf.z[k];
    }
    sums.map(|sum| sum * cmf.step)
}

/// Integrates a cube already resampled on the window's wavelengths.
pub fn integrate(resampled: &ArrayD<f64>, cmf: &CmfWindow<'_>) -> Result<Tristimulus, FuiError> {
    if resampled.ndim() == 0 || resampled.len_of(Axis(0)) != cmf.len() {
        return Err(FuiError::InvalidSpectrum(format!(
            "resampled shape {:?} does not match {} color-matching samples",
            resampled.shape(),
            cmf.len()
        )));
    }

    let spatial = IxDyn(&resampled.shape()[1..]);
    let mut x = ArrayD::<f64>::zeros(spatial.clone());
    let mut y = ArrayD::<f64>::zeros(spatial.clone());
    let mut z = ArrayD::<f64>::zeros(spatial);

    Zip::from(&mut x)
        .and(&mut y)
        .and(&mut z)
        .and(resampled.lanes(Axis(0)))
        .par_for_each(|x, y, z, spectrum| {
            let [sx, sy, sz] = integrate_pixel(spectrum, cmf);
            *x = sx;
            *y = sy;
            *z = sz;
        });

    Ok(Tristimulus { x, y, z })
}
