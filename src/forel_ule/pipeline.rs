use ndarray::ArrayD;
use tracing::{debug, debug_span};

use super::chromaticity::{Chromaticity, chromaticity};
use super::classify::classify;
use super::hue_angle::hue_angles;
use super::overlap::resolve_overlap;
use super::resample::resample;
use super::tristimulus::{Tristimulus, integrate};
use crate::error::FuiError;
use crate::lut::{CmfTable, FuAngleTable};
use crate::spectrum::Spectrum;

/// Every per-pixel product of the pipeline, all shaped like the spatial
/// dimensions of the input.
#[derive(Debug, Clone)]
pub struct FuiProducts {
    pub tristimulus: Tristimulus,
    pub chromaticity: Chromaticity,
    pub hue_angle: ArrayD<f64>,
    pub fu_class: ArrayD<u8>,
}

/// Forel-Ule classifier holding the reference tables, so they are loaded and
/// validated once and reused across spectra.
#[derive(Debug, Clone)]
pub struct ForelUle {
    cmf: CmfTable,
    angles: FuAngleTable,
}

impl ForelUle {
    pub fn new(cmf: CmfTable, angles: FuAngleTable) -> Self {
        Self { cmf, angles }
    }

    pub fn cmf(&self) -> &CmfTable {
        &self.cmf
    }

    pub fn angles(&self) -> &FuAngleTable {
        &self.angles
    }

    pub fn compute(&self, spectrum: &Spectrum) -> Result<FuiProducts, FuiError> {
        run(spectrum, &self.cmf, &self.angles)
    }

    pub fn classify(&self, spectrum: &Spectrum) -> Result<ArrayD<u8>, FuiError> {
        compute_fu_class(spectrum, &self.cmf, &self.angles)
    }
}

/// Forel-Ule class (0-21) of every pixel of `spectrum`.
pub fn compute_fu_class(
    spectrum: &Spectrum,
    cmf: &CmfTable,
    angles: &FuAngleTable,
) -> Result<ArrayD<u8>, FuiError> {
    Ok(run(spectrum, cmf, angles)?.fu_class)
}

fn run(
    spectrum: &Spectrum,
    cmf: &CmfTable,
    angles: &FuAngleTable,
) -> Result<FuiProducts, FuiError> {
    let _guard = debug_span!("forel_ule", shape = ?spectrum.spatial_shape()).entered();

    let overlap = resolve_overlap(spectrum, cmf)?;
    debug!(
        start = overlap.start,
        end = overlap.end,
        samples = overlap.cmf.len(),
        "resolved wavelength overlap"
    );

    let resampled = resample(spectrum, overlap.cmf.wavelengths)?;
    let tristimulus = integrate(&resampled, &overlap.cmf)?;
    let chromaticity = chromaticity(&tristimulus);
    let hue_angle = hue_angles(&chromaticity);
    let fu_class = classify(&hue_angle, angles);

    Ok(FuiProducts {
        tristimulus,
        chromaticity,
        hue_angle,
        fu_class,
    })
}
