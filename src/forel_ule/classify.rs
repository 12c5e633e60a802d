use ndarray::{ArrayD, Zip};

use crate::lut::FuAngleTable;

/// Forel-Ule class of every hue angle (see [`FuAngleTable::class_of`]).
pub fn classify(angles: &ArrayD<f64>, table: &FuAngleTable) -> ArrayD<u8> {
    Zip::from(angles).par_map_collect(|&angle| table.class_of(angle))
}
