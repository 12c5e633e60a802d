use std::fmt::Display;

use ndarray::{ArrayD, Axis};

use crate::error::FuiError;

/// Reflectance sampled at a strictly increasing set of wavelengths.
///
/// The reflectance array is laid out as `(wavelength, spatial...)`: the
/// leading axis follows `wavelengths`, every trailing axis is a spatial
/// dimension and may have any extent.
#[derive(Debug, Clone)]
pub struct Spectrum {
    wavelengths: Vec<f64>,
    reflectance: ArrayD<f64>,
}

impl Spectrum {
    pub fn new(wavelengths: Vec<f64>, reflectance: ArrayD<f64>) -> Result<Self, FuiError> {
        if wavelengths.is_empty() {
            return Err(FuiError::InvalidSpectrum(
                "at least one wavelength is required".to_string(),
            ));
        }

        if reflectance.ndim() == 0 || reflectance.len_of(Axis(0)) != wavelengths.len() {
            return Err(FuiError::InvalidSpectrum(format!(
                "{} wavelengths for a reflectance array of shape {:?}",
                wavelengths.len(),
                reflectance.shape()
            )));
        }

        if let Some(wl) = wavelengths.iter().find(|wl| !wl.is_finite()) {
            return Err(FuiError::InvalidSpectrum(format!(
                "wavelength {} is not finite",
                wl
            )));
        }

        if let Some(pair) = wavelengths.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(FuiError::InvalidSpectrum(format!(
                "wavelengths must be strictly increasing ({} nm followed by {} nm)",
                pair[0], pair[1]
            )));
        }

        Ok(Self {
            wavelengths,
            reflectance,
        })
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn reflectance(&self) -> &ArrayD<f64> {
        &self.reflectance
    }

    /// Shape of the per-pixel products (the reflectance shape without its
    /// wavelength axis).
    pub fn spatial_shape(&self) -> &[usize] {
        &self.reflectance.shape()[1..]
    }

    pub fn min_wavelength(&self) -> f64 {
        self.wavelengths[0]
    }

    pub fn max_wavelength(&self) -> f64 {
        self.wavelengths[self.wavelengths.len() - 1]
    }
}

impl Display for Spectrum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spectrum: {} wavelengths ({}-{} nm), spatial shape {:?}",
            self.wavelengths.len(),
            self.min_wavelength(),
            self.max_wavelength(),
            self.spatial_shape()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    fn test_spectrum_shape_checks() {
        let reflectance = ArrayD::<f64>::zeros(IxDyn(&[3, 2, 4]));
        let spectrum = Spectrum::new(vec![400.0, 500.0, 600.0], reflectance.clone()).unwrap();
        assert_eq!(spectrum.spatial_shape(), &[2, 4]);
        assert_eq!(spectrum.min_wavelength(), 400.0);
        assert_eq!(spectrum.max_wavelength(), 600.0);

        // Leading dimension does not match the wavelength count
        let mismatch = Spectrum::new(vec![400.0, 500.0], reflectance);
        assert!(matches!(mismatch, Err(FuiError::InvalidSpectrum(_))));
    }

    #[test]
    fn test_spectrum_wavelength_order() {
        let reflectance = ArrayD::<f64>::zeros(IxDyn(&[3]));
        let decreasing = Spectrum::new(vec![500.0, 450.0, 600.0], reflectance.clone());
        assert!(matches!(decreasing, Err(FuiError::InvalidSpectrum(_))));

        let repeated = Spectrum::new(vec![400.0, 400.0, 600.0], reflectance.clone());
        assert!(matches!(repeated, Err(FuiError::InvalidSpectrum(_))));

        let nan = Spectrum::new(vec![400.0, f64::NAN, 600.0], reflectance);
        assert!(matches!(nan, Err(FuiError::InvalidSpectrum(_))));

        let empty = Spectrum::new(vec![], ArrayD::<f64>::zeros(IxDyn(&[0])));
        assert!(matches!(empty, Err(FuiError::InvalidSpectrum(_))));
    }
}
