use crate::error::FuiError;
use crate::lut::{CmfTable, CmfWindow};
use crate::spectrum::Spectrum;

/// Wavelength range shared by a spectrum and the color-matching table,
/// together with the color-matching samples that fall inside it.
#[derive(Debug, Clone, Copy)]
pub struct Overlap<'a> {
    pub start: f64,
    pub end: f64,
    pub cmf: CmfWindow<'a>,
}

pub fn resolve_overlap<'a>(
    spectrum: &Spectrum,
    cmf: &'a CmfTable,
) -> Result<Overlap<'a>, FuiError> {
    let start = cmf.min_wavelength().max(spectrum.min_wavelength());
    let end = cmf.max_wavelength().min(spectrum.max_wavelength());

    if start > end {
        return Err(FuiError::NoOverlap {
            input_min: spectrum.min_wavelength(),
            input_max: spectrum.max_wavelength(),
            cmf_min: cmf.min_wavelength(),
            cmf_max: cmf.max_wavelength(),
        });
    }

    let window = cmf.window(start, end);
    if window.is_empty() {
        return Err(FuiError::EmptyOverlap { start, end });
    }

    Ok(Overlap {
        start,
        end,
        cmf: window,
    })
}
