use ndarray::{ArrayD, Zip};

use super::chromaticity::Chromaticity;
use super::constants::WHITE_POINT;

/// Hue angle in degrees of a chromaticity relative to the white point,
/// in `[0, 360)`. NaN coordinates give a NaN angle.
pub fn hue_angle(x: f64, y: f64) -> f64 {
    let angle = (y - WHITE_POINT).atan2(x - WHITE_POINT).to_degrees();
    if angle < 0.0 {
        let wrapped = angle + 360.0;
        // -1e-14 + 360.0 rounds to 360.0
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        angle
    }
}

pub fn hue_angles(chromaticity: &Chromaticity) -> ArrayD<f64> {
    Zip::from(&chromaticity.x)
        .and(&chromaticity.y)
        .par_map_collect(|&x, &y| hue_angle(x, y))
}
