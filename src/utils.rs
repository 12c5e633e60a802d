use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ndarray::ArrayD;
use thiserror::Error;
use tiff::encoder::{TiffEncoder, colortype};
use tracing::{debug, warn};

use crate::forel_ule::{FU_MAX, FU_UNDEFINED};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode TIFF: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("class raster must be 2-D, got shape {0:?}")]
    Shape(Vec<usize>),
}

/// Number of pixels per class, indexed by class id (0 = undefined).
pub fn class_histogram(classes: &ArrayD<u8>) -> [usize; FU_MAX as usize + 1] {
    let mut counts = [0; FU_MAX as usize + 1];
    for &class in classes {
        if let Some(count) = counts.get_mut(class as usize) {
            *count += 1;
        }
    }
    counts
}

pub fn print_class_statistics(classes: &ArrayD<u8>) {
    let counts = class_histogram(classes);
    let total = classes.len();
    let undefined = counts[FU_UNDEFINED as usize];

    println!(
        "Forel-Ule classes - Shape: {:?}, Total pixels: {}",
        classes.shape(),
        total
    );

    if total == 0 {
        return;
    }

    println!(
        "  Valid pixels: {} / {} ({:.1}%)",
        total - undefined,
        total,
        100.0 * (total - undefined) as f64 / total as f64
    );

    for (class, &count) in counts.iter().enumerate().skip(1) {
        if count > 0 {
            println!("  FU {:>2}: {}", class, count);
        }
    }

    if undefined > 0 {
        warn!(undefined, total, "pixels without a defined Forel-Ule class");
    }
}

/// Writes a 2-D class array as an 8-bit grayscale TIFF, rows first.
pub fn write_class_raster<P: AsRef<Path>>(path: P, classes: &ArrayD<u8>) -> Result<(), WriteError> {
    let (height, width) = match classes.shape() {
        &[height, width] => (height, width),
        shape => return Err(WriteError::Shape(shape.to_vec())),
    };

    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = TiffEncoder::new(file)?;

    // Logical order, whatever the memory layout
    let data: Vec<u8> = classes.iter().copied().collect();
    encoder.write_image::<colortype::Gray8>(width as u32, height as u32, &data)?;

    debug!(path = %path.display(), rows = height, cols = width, "wrote class raster");
    Ok(())
}
