use thiserror::Error;

/// Errors raised by the Forel-Ule pipeline and by the validating constructors
/// of its inputs.
#[derive(Debug, Error)]
pub enum FuiError {
    #[error(
        "no wavelength overlap: spectrum covers {input_min}-{input_max} nm, color-matching table covers {cmf_min}-{cmf_max} nm"
    )]
    NoOverlap {
        input_min: f64,
        input_max: f64,
        cmf_min: f64,
        cmf_max: f64,
    },

    #[error("wavelength overlap {start}-{end} nm contains no color-matching sample")]
    EmptyOverlap { start: f64, end: f64 },

    #[error("wavelength {0} nm lies outside the sampled spectrum")]
    Extrapolation(f64),

    #[error("malformed {table} table: {reason}")]
    MalformedTable { table: &'static str, reason: String },

    #[error("invalid spectrum: {0}")]
    InvalidSpectrum(String),
}

impl FuiError {
    pub(crate) fn malformed(table: &'static str, reason: impl Into<String>) -> Self {
        FuiError::MalformedTable {
            table,
            reason: reason.into(),
        }
    }
}
