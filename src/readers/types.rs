use std::fmt;

use ndarray::ArrayD;
use thiserror::Error;

use crate::error::FuiError;
use crate::spectrum::Spectrum;

pub trait DataReader {
    fn read_data(&self) -> Result<SpectralData, ReadError>;
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("GeoTIFF: {0}")]
    GeoTiff(String),

    #[error("TSV: {0}")]
    Tsv(String),

    #[error("no wavelengths in the input file and none configured")]
    MissingWavelengths,

    #[error(transparent)]
    Spectrum(#[from] FuiError),
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("unknown file type: {0}")]
    UnknownFileType(String),
}

/// Reflectance cube as read from disk, laid out `(band, spatial...)`.
///
/// Formats that store the band wavelengths (delimited text) fill in
/// `wavelengths`; raster formats leave it to the configuration.
#[derive(Debug)]
pub struct SpectralData {
    pub wavelengths: Option<Vec<f64>>,
    pub reflectance: ArrayD<f64>,
}

pub enum FileType {
    GeoTiff,
    Tsv,
}

impl SpectralData {
    /// Replaces `nodata` values by NaN so the affected pixels classify as
    /// undefined.
    pub fn mask_nodata(&mut self, nodata: f64) {
        self.reflectance.mapv_inplace(|v| if v == nodata { f64::NAN } else { v });
    }

    /// Pairs the cube with its wavelengths. Configured wavelengths take
    /// precedence over the ones stored in the file.
    pub fn into_spectrum(self, configured: Option<&[f64]>) -> Result<Spectrum, ReadError> {
        let wavelengths = configured
            .map(<[f64]>::to_vec)
            .or(self.wavelengths)
            .ok_or(ReadError::MissingWavelengths)?;

        Ok(Spectrum::new(wavelengths, self.reflectance)?)
    }
}

impl fmt::Display for SpectralData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min_value = self
            .reflectance
            .iter()
            .copied()
            .filter(|x| !x.is_nan())
            .fold(f64::NAN, f64::min);

        let max_value = self
            .reflectance
            .iter()
            .copied()
            .filter(|x| !x.is_nan())
            .fold(f64::NAN, f64::max);

        write!(
            f,
            "Shape: {:?}\nBands: {}\nWavelengths: {:?}\nMin value: {}\nMax value: {}",
            self.reflectance.shape(),
            self.reflectance.shape().first().copied().unwrap_or(0),
            self.wavelengths,
            min_value,
            max_value,
        )
    }
}
