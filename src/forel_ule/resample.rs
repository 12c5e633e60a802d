use ndarray::{ArrayD, Axis, IxDyn, Zip};

use crate::error::FuiError;
use crate::spectrum::Spectrum;

/// Position of a target wavelength within the sampled wavelengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// The target coincides with sample `index`.
    Exact(usize),
    /// The target lies between samples `lower` and `lower + 1`, `weight` being
    /// its fractional distance from `lower`.
    Between { lower: usize, weight: f64 },
}

impl Bracket {
    pub fn locate(source: &[f64], target: f64) -> Result<Self, FuiError> {
        // First sample at or above the target
        let upper = source.partition_point(|&wl| wl < target);

        if upper < source.len() && source[upper] == target {
            return Ok(Bracket::Exact(upper));
        }
        if upper == 0 || upper == source.len() {
            return Err(FuiError::Extrapolation(target));
        }

        let lower = upper - 1;
        let weight = (target - source[lower]) / (source[upper] - source[lower]);
        Ok(Bracket::Between { lower, weight })
    }

    /// Interpolated value for one pixel, `samples` being its spectrum.
    pub fn interpolate(&self, samples: &[f64]) -> f64 {
        match *self {
            Bracket::Exact(index) => samples[index],
            Bracket::Between { lower, weight } => {
                lerp(samples[lower], samples[lower + 1], weight)
            }
        }
    }
}

fn lerp(lower: f64, upper: f64, weight: f64) -> f64 {
    lower + (upper - lower) * weight
}

pub fn brackets(source: &[f64], targets: &[f64]) -> Result<Vec<Bracket>, FuiError> {
    targets
        .iter()
        .map(|&target| Bracket::locate(source, target))
        .collect()
}

/// Linearly interpolates the spectrum onto `targets`, keeping every spatial
/// dimension. The result has shape `(targets.len(), spatial...)`.
pub fn resample(spectrum: &Spectrum, targets: &[f64]) -> Result<ArrayD<f64>, FuiError> {
    let brackets = brackets(spectrum.wavelengths(), targets)?;
    let reflectance = spectrum.reflectance();

    let mut shape = reflectance.shape().to_vec();
    shape[0] = targets.len();
    let mut resampled = ArrayD::<f64>::zeros(IxDyn(&shape));

    for (mut plane, bracket) in resampled.axis_iter_mut(Axis(0)).zip(&brackets) {
        match *bracket {
            Bracket::Exact(index) => plane.assign(&reflectance.index_axis(Axis(0), index)),
            Bracket::Between { lower, weight } => {
                Zip::from(&mut plane)
                    .and(&reflectance.index_axis(Axis(0), lower))
                    .and(&reflectance.index_axis(Axis(0), lower + 1))
                    .par_for_each(|out, &lo, &hi| *out = lerp(lo, hi, weight));
            }
        }
    }

    Ok(resampled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array;

    fn two_pixel_spectrum() -> Spectrum {
        // Pixel 0 rises linearly, pixel 1 is flat
        let wavelengths = vec![400.0, 450.0, 500.0, 550.0];
        let reflectance = Array::from_shape_vec(
            IxDyn(&[4, 2]),
            vec![0.0, 0.3, 0.1, 0.3, 0.2, 0.3, 0.3, 0.3],
        )
        .unwrap();
        Spectrum::new(wavelengths, reflectance).unwrap()
    }

    #[test]
    fn test_locate() {
        let source = [400.0, 450.0, 500.0];
        assert_eq!(Bracket::locate(&source, 400.0).unwrap(), Bracket::Exact(0));
        assert_eq!(Bracket::locate(&source, 500.0).unwrap(), Bracket::Exact(2));
        assert_eq!(
            Bracket::locate(&source, 475.0).unwrap(),
            Bracket::Between {
                lower: 1,
                weight: 0.5
            }
        );
        assert!(matches!(
            Bracket::locate(&source, 399.0),
            Err(FuiError::Extrapolation(_))
        ));
        assert!(matches!(
            Bracket::locate(&source, 501.0),
            Err(FuiError::Extrapolation(_))
        ));
    }

    #[test]
    fn test_resample_on_own_grid_subset() {
        let spectrum = two_pixel_spectrum();
        let resampled = resample(&spectrum, &[450.0, 550.0]).unwrap();

        assert_eq!(resampled.shape(), &[2, 2]);
        assert_eq!(
            resampled,
            spectrum
                .reflectance()
                .select(Axis(0), &[1, 3])
        );
    }

    #[test]
    fn test_resample_between_samples() {
        let spectrum = two_pixel_spectrum();
        let resampled = resample(&spectrum, &[425.0, 510.0]).unwrap();

        assert_relative_eq!(resampled[[0, 0]], 0.05, epsilon = 1e-12);
        assert_relative_eq!(resampled[[1, 0]], 0.22, epsilon = 1e-12);
        assert_relative_eq!(resampled[[0, 1]], 0.3, epsilon = 1e-12);
        assert_relative_eq!(resampled[[1, 1]], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_match_ignores_nan_neighbours() {
        let reflectance =
            Array::from_shape_vec(IxDyn(&[3, 1]), vec![f64::NAN, 0.4, f64::NAN]).unwrap();
        let spectrum = Spectrum::new(vec![400.0, 500.0, 600.0], reflectance).unwrap();

        let resampled = resample(&spectrum, &[500.0]).unwrap();
        assert_eq!(resampled[[0, 0]], 0.4);

        let resampled = resample(&spectrum, &[550.0]).unwrap();
        assert!(resampled[[0, 0]].is_nan());
    }

    #[test]
    fn test_resample_keeps_spatial_dimensions() {
        let reflectance = Array::from_shape_fn(IxDyn(&[2, 3, 4]), |idx| {
            (idx[0] * 100 + idx[1] * 10 + idx[2]) as f64
        });
        let spectrum = Spectrum::new(vec![400.0, 500.0], reflectance).unwrap();

        let resampled = resample(&spectrum, &[400.0, 450.0, 500.0]).unwrap();
        assert_eq!(resampled.shape(), &[3, 3, 4]);
        assert_relative_eq!(resampled[[1, 2, 3]], 73.0, epsilon = 1e-12);
        assert_eq!(resampled[[2, 2, 3]], 123.0);
    }

    #[test]
    fn test_bracket_interpolate_matches_array_path() {
        let spectrum = two_pixel_spectrum();
        let targets = [400.0, 430.0, 515.0, 550.0];
        let resampled = resample(&spectrum, &targets).unwrap();
        let brackets = brackets(spectrum.wavelengths(), &targets).unwrap();

        let pixel: Vec<f64> = spectrum
            .reflectance()
            .index_axis(Axis(1), 0)
            .iter()
            .copied()
            .collect();
        for (k, bracket) in brackets.iter().enumerate() {
            assert_eq!(bracket.interpolate(&pixel), resampled[[k, 0]]);
        }
    }
}
