use super::{DataReader, ReadError, SpectralData};
use ndarray::{ArrayD, IxDyn};
use std::fs::File;
use std::io::BufReader;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

/// Multi-band reflectance raster. Bands are either stored as consecutive
/// pages or interleaved as samples of a single page.
pub struct GeoTiffReader {
    pub file_name: String,
}

fn samples_per_pixel(color_type: ColorType) -> Result<usize, ReadError> {
    match color_type {
        ColorType::Gray(_) => Ok(1),
        ColorType::GrayA(_) => Ok(2),
        ColorType::RGB(_) => Ok(3),
        ColorType::RGBA(_) => Ok(4),
        ColorType::Multiband { num_samples, .. } => Ok(num_samples as usize),
        other => Err(ReadError::GeoTiff(format!(
            "Unsupported color type: {:?}",
            other
        ))),
    }
}

fn to_f64(result: DecodingResult) -> Result<Vec<f64>, ReadError> {
    let values = match result {
        DecodingResult::U8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::F32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::F64(data) => data,
        _ => return Err(ReadError::GeoTiff("Unsupported pixel format".to_string())),
    };
    Ok(values)
}

impl DataReader for GeoTiffReader {
    fn read_data(&self) -> Result<SpectralData, ReadError> {
        let file = File::open(&self.file_name)
            .map_err(|e| ReadError::GeoTiff(format!("Failed to open file: {}", e)))?;

        let reader = BufReader::new(file);

        let mut decoder = Decoder::new(reader)
            .map_err(|e| ReadError::GeoTiff(format!("Failed to decode TIFF: {}", e)))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ReadError::GeoTiff(format!("Failed to get dimensions: {}", e)))?;
        let (width, height) = (width as usize, height as usize);
        let n_pixels = width * height;

        // Band-major buffer, one plane of `n_pixels` per band
        let mut planes: Vec<f64> = Vec::new();
        let mut n_bands = 0;

        loop {
            let page_dimensions = decoder
                .dimensions()
                .map_err(|e| ReadError::GeoTiff(format!("Failed to get dimensions: {}", e)))?;
            if page_dimensions != (width as u32, height as u32) {
                return Err(ReadError::GeoTiff(format!(
                    "Page {} is {:?}, expected {:?}",
                    n_bands, page_dimensions, (width, height)
                )));
            }

            let color_type = decoder
                .colortype()
                .map_err(|e| ReadError::GeoTiff(format!("Failed to get color type: {}", e)))?;
            let samples = samples_per_pixel(color_type)?;

            let page = to_f64(
                decoder
                    .read_image()
                    .map_err(|e| ReadError::GeoTiff(format!("Failed to read image: {}", e)))?,
            )?;
            if page.len() != n_pixels * samples {
                return Err(ReadError::GeoTiff(format!(
                    "Page {} holds {} values, expected {}",
                    n_bands,
                    page.len(),
                    n_pixels * samples
                )));
            }

            // De-interleave samples into separate planes
            for sample in 0..samples {
                planes.extend(page.iter().skip(sample).step_by(samples).copied());
            }
            n_bands += samples;

            if !decoder.more_images() {
                break;
            }
            decoder
                .next_image()
                .map_err(|e| ReadError::GeoTiff(format!("Failed to read next page: {}", e)))?;
        }

        let reflectance = ArrayD::from_shape_vec(IxDyn(&[n_bands, height, width]), planes)
            .map_err(|e| ReadError::GeoTiff(format!("Invalid shape: {}", e)))?;

        debug!(file = %self.file_name, bands = n_bands, rows = height, cols = width, "read reflectance raster");

        Ok(SpectralData {
            wavelengths: None,
            reflectance,
        })
    }
}
