use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::error::FuiError;
use crate::lut::cmf::CmfTable;
use crate::lut::fu_angles::{FuAngleTable, FuBoundary};
use crate::readers::delimited::{DelimitedError, DelimitedTable, read_delimited};

const CMF_COLUMNS: [&str; 4] = ["wavelength", "x", "y", "z"];

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: DelimitedError,
    },

    #[error("{path}: {reason}")]
    Columns { path: String, reason: String },

    #[error(transparent)]
    Table(#[from] FuiError),
}

fn read_table(path: &Path) -> Result<DelimitedTable, TableLoadError> {
    read_delimited(path).map_err(|source| TableLoadError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Loads a color-matching table with `wavelength x y z` columns.
///
/// Columns are located by name when the file has a header, by position
/// otherwise.
pub fn load_cmf_table<P: AsRef<Path>>(path: P) -> Result<CmfTable, TableLoadError> {
    let path = path.as_ref();
    let table = read_table(path)?;

    let indices: Vec<usize> = if table.header.is_some() {
        CMF_COLUMNS
            .iter()
            .map(|name| {
                table
                    .column_index(name)
                    .ok_or_else(|| TableLoadError::Columns {
                        path: path.display().to_string(),
                        reason: format!("missing '{}' column", name),
                    })
            })
            .collect::<Result<_, _>>()?
    } else if table.n_columns() >= CMF_COLUMNS.len() {
        (0..CMF_COLUMNS.len()).collect()
    } else {
        return Err(TableLoadError::Columns {
            path: path.display().to_string(),
            reason: format!("expected 4 columns, found {}", table.n_columns()),
        });
    };

    let cmf = CmfTable::new(
        table.column(indices[0]),
        table.column(indices[1]),
        table.column(indices[2]),
        table.column(indices[3]),
    )?;

    debug!(path = %path.display(), samples = cmf.len(), step = cmf.step(), "loaded color-matching table");
    Ok(cmf)
}

/// Loads the Forel-Ule boundary table: one `class_id angle` row per class,
/// bluest class first.
pub fn load_fu_angle_table<P: AsRef<Path>>(path: P) -> Result<FuAngleTable, TableLoadError> {
    let path = path.as_ref();
    let table = read_table(path)?;

    if table.n_columns() < 2 {
        return Err(TableLoadError::Columns {
            path: path.display().to_string(),
            reason: format!("expected 2 columns, found {}", table.n_columns()),
        });
    }

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let value = row[0];
            if value.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&value) {
                return Err(TableLoadError::Columns {
                    path: path.display().to_string(),
                    reason: format!("class id '{}' at row {} is not an integer class", value, i + 1),
                });
            }
            Ok(FuBoundary {
                class_id: value as u8,
                angle: row[1],
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let angles = FuAngleTable::new(rows)?;

    debug!(path = %path.display(), boundaries = angles.len(), "loaded Forel-Ule angle table");
    Ok(angles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_cmf_with_reordered_header() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "cmf.tsv",
            "x\twavelength\ty\tz\n0.1\t400\t0.2\t0.3\n0.4\t405\t0.5\t0.6\n0.7\t410\t0.8\t0.9\n",
        );

        let cmf = load_cmf_table(&path).unwrap();
        assert_eq!(cmf.wavelengths(), &[400.0, 405.0, 410.0]);
        assert_eq!(cmf.x(), &[0.1, 0.4, 0.7]);
        assert_eq!(cmf.z(), &[0.3, 0.6, 0.9]);
        assert_eq!(cmf.step(), 5.0);
    }

    #[test]
    fn test_load_cmf_errors() {
        let dir = tempdir().unwrap();

        let missing = write_file(dir.path(), "missing.tsv", "wavelength\tx\ty\n400\t0.1\t0.2\n");
        assert!(matches!(
            load_cmf_table(&missing),
            Err(TableLoadError::Columns { .. })
        ));

        let uneven = write_file(
            dir.path(),
            "uneven.tsv",
            "400\t0.1\t0.2\t0.3\n405\t0.1\t0.2\t0.3\n415\t0.1\t0.2\t0.3\n",
        );
        assert!(matches!(
            load_cmf_table(&uneven),
            Err(TableLoadError::Table(FuiError::MalformedTable { .. }))
        ));

        let wide_header = write_file(
            dir.path(),
            "wide_header.tsv",
            "id\twavelength\tx\ty\tz\n400\t0.1\t0.2\t0.3\n405\t0.1\t0.2\t0.3\n",
        );
        assert!(matches!(
            load_cmf_table(&wide_header),
            Err(TableLoadError::Read {
                source: DelimitedError::RaggedRow { .. },
                ..
            })
        ));

        assert!(matches!(
            load_cmf_table(dir.path().join("absent.tsv")),
            Err(TableLoadError::Read { .. })
        ));
    }

    #[test]
    fn test_load_fu_angle_table() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "fui.tsv", "1\t229.45\n2\t224.79\n3\t217.12\n");

        let table = load_fu_angle_table(&path).unwrap();
        assert_eq!(table.class_ids(), &[1, 2, 3]);
        assert_eq!(table.angles(), &[229.45, 224.79, 217.12]);
    }

    #[test]
    fn test_load_fu_angle_table_errors() {
        let dir = tempdir().unwrap();

        let fractional = write_file(dir.path(), "fractional.tsv", "1.5\t229.45\n2\t224.79\n");
        assert!(matches!(
            load_fu_angle_table(&fractional),
            Err(TableLoadError::Columns { .. })
        ));

        let increasing = write_file(dir.path(), "increasing.tsv", "1\t20.0\n2\t30.0\n");
        assert!(matches!(
            load_fu_angle_table(&increasing),
            Err(TableLoadError::Table(FuiError::MalformedTable { .. }))
        ));
    }
}
