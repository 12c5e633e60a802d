use ndarray::{ArrayD, Zip};

use super::tristimulus::Tristimulus;

/// CIE chromaticity coordinates per pixel.
#[derive(Debug, Clone)]
pub struct Chromaticity {
    pub x: ArrayD<f64>,
    pub y: ArrayD<f64>,
    pub z: ArrayD<f64>,
}

/// Normalizes one pixel's tristimulus values by their sum. A zero sum yields
/// NaN coordinates.
pub fn chromaticity_of(x: f64, y: f64, z: f64) -> [f64; 3] {
    let sum = x + y + z;
    [x / sum, y / sum, z / sum]
}

pub fn chromaticity(tristimulus: &Tristimulus) -> Chromaticity {
    let shape = tristimulus.x.raw_dim();
    let mut x = ArrayD::<f64>::zeros(shape.clone());
    let mut y = ArrayD::<f64>::zeros(shape.clone());
    let mut z = ArrayD::<f64>::zeros(shape);

    Zip::from(&mut x)
        .and(&mut y)
        .and(&mut z)
        .and(&tristimulus.x)
        .and(&tristimulus.y)
        .and(&tristimulus.z)
        .par_for_each(|cx, cy, cz, &tx, &ty, &tz| {
            let [nx, ny, nz] = chromaticity_of(tx, ty, tz);
            *cx = nx;
            *cy = ny;
            *cz = nz;
        });

    Chromaticity { x, y, z }
}
