//! Forel-Ule water color index from reflectance spectra
//!
//! The index is derived in six per-pixel stages:
//!
//! 1. **Overlap**: intersect the spectrum's wavelength range with the
//!    color-matching table and keep the table samples inside it
//! 2. **Resampling**: linear interpolation of the reflectance onto those samples
//! 3. **Tristimulus**: rectangle-rule integration against x̄, ȳ and z̄
//! 4. **Chromaticity**: normalization of X, Y and Z by their sum
//! 5. **Hue angle**: angle of the chromaticity around the white point (1/3, 1/3)
//! 6. **Classification**: lookup of the angle in the Forel-Ule boundary table
//!
//! Pixels are independent; the array stages run on the rayon thread pool.
//!
//! ## References
//!
//! - Wernand, M. R., & van der Woerd, H. J. (2010). Spectral analysis of the
//!   Forel-Ule ocean colour comparator scale. *Journal of the European Optical
//!   Society*, 5, 10014s.
//! - van der Woerd, H. J., & Wernand, M. R. (2015). True colour classification
//!   of natural waters with medium-spectral resolution satellites. *Remote
//!   Sensing*, 7(10), 14210-14235.
//!
//! ## Usage Example
//!
//! ```rust
//! use forelule::forel_ule::compute_fu_class;
//! use forelule::lut::{FuAngleTable, FuBoundary, analytic};
//! use forelule::spectrum::Spectrum;
//! use ndarray::{ArrayD, IxDyn};
//!
//! let cmf = analytic::cie1931_default().unwrap();
//! let angles = FuAngleTable::new(
//!     (1..=21)
//!         .map(|class_id| FuBoundary {
//!             class_id,
//!             angle: 230.0 - 10.5 * (class_id - 1) as f64,
//!         })
//!         .collect(),
//! )
//! .unwrap();
//!
//! let wavelengths = vec![412.0, 443.0, 490.0, 510.0, 555.0, 670.0];
//! let reflectance = ArrayD::from_elem(IxDyn(&[6, 2, 2]), 0.01);
//! let spectrum = Spectrum::new(wavelengths, reflectance).unwrap();
//!
//! let classes = compute_fu_class(&spectrum, &cmf, &angles).unwrap();
//! assert_eq!(classes.shape(), &[2, 2]);
//! ```

pub mod chromaticity;
pub mod classify;
pub mod constants;
pub mod hue_angle;
pub mod overlap;
pub mod pipeline;
pub mod resample;
pub mod tristimulus;

pub use chromaticity::{Chromaticity, chromaticity, chromaticity_of};
pub use classify::classify;
pub use constants::*;
pub use hue_angle::{hue_angle, hue_angles};
pub use overlap::{Overlap, resolve_overlap};
pub use pipeline::{ForelUle, FuiProducts, compute_fu_class};
pub use resample::{Bracket, brackets, resample};
pub use tristimulus::{Tristimulus, integrate, integrate_pixel};
