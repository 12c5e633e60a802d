//! Forel-Ule water-color index from remote-sensing reflectance spectra.
//!
//! The [`forel_ule`] module holds the colorimetric pipeline; [`lut`] loads or
//! generates its reference tables and [`readers`] turns spectral files into
//! [`Spectrum`] cubes.

pub mod config;
pub mod error;
pub mod forel_ule;
pub mod lut;
pub mod readers;
pub mod spectrum;
pub mod utils;

pub use error::FuiError;
pub use forel_ule::{ForelUle, FuiProducts, compute_fu_class};
pub use spectrum::Spectrum;
