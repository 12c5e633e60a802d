use ndarray::{ArrayD, IxDyn};
use tracing::debug;

use super::delimited::read_delimited;
use super::{DataReader, ReadError, SpectralData};

/// Point spectra stored as text: the first column holds the wavelengths, each
/// further column one spectrum. Yields a `(wavelength, spectrum)` cube.
pub struct TsvReader {
    pub file_name: String,
}

impl DataReader for TsvReader {
    fn read_data(&self) -> Result<SpectralData, ReadError> {
        let table = read_delimited(&self.file_name)
            .map_err(|e| ReadError::Tsv(format!("Failed to read {}: {}", self.file_name, e)))?;

        if table.n_columns() < 2 {
            return Err(ReadError::Tsv(format!(
                "{} needs a wavelength column and at least one spectrum",
                self.file_name
            )));
        }

        let n_spectra = table.n_columns() - 1;
        let wavelengths = table.column(0);
        let values: Vec<f64> = table
            .rows
            .iter()
            .flat_map(|row| row[1..].iter().copied())
            .collect();

        let reflectance = ArrayD::from_shape_vec(IxDyn(&[table.n_rows(), n_spectra]), values)
            .map_err(|e| ReadError::Tsv(format!("Invalid shape: {}", e)))?;

        debug!(file = %self.file_name, wavelengths = wavelengths.len(), spectra = n_spectra, "read point spectra");

        Ok(SpectralData {
            wavelengths: Some(wavelengths),
            reflectance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_point_spectra() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("stations.tsv");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"wavelength\tst1\tst2\n412\t0.004\t0.001\n443\t0.005\t0.002\n490\t0.006\t0.003\n")
            .unwrap();

        let reader = TsvReader {
            file_name: file_path.to_string_lossy().to_string(),
        };
        let data = reader.read_data().unwrap();

        assert_eq!(data.wavelengths, Some(vec![412.0, 443.0, 490.0]));
        assert_eq!(data.reflectance.shape(), &[3, 2]);
        assert_eq!(data.reflectance[[1, 0]], 0.005);
        assert_eq!(data.reflectance[[2, 1]], 0.003);
    }

    #[test]
    fn test_wavelength_column_only() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.tsv");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"412\n443\n").unwrap();

        let reader = TsvReader {
            file_name: file_path.to_string_lossy().to_string(),
        };
        assert!(matches!(reader.read_data(), Err(ReadError::Tsv(_))));
    }
}
