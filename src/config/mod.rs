use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    input: PathBuf,
    fu_table: PathBuf,
    cmf_table: Option<PathBuf>,
    wavelengths: Option<Vec<f64>>,
    output: Option<PathBuf>,
    threads: Option<usize>,
    nodata: Option<f64>,
}

// Deserializes a Config through a helper, rejecting band wavelengths that are
// not strictly increasing and a zero-sized thread pool.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ConfigHelper {
            input: PathBuf,
            fu_table: PathBuf,
            cmf_table: Option<PathBuf>,
            wavelengths: Option<Vec<f64>>,
            output: Option<PathBuf>,
            threads: Option<usize>,
            nodata: Option<f64>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        if let Some(wavelengths) = &helper.wavelengths {
            let valid = !wavelengths.is_empty()
                && wavelengths.iter().all(|wl| wl.is_finite())
                && wavelengths.windows(2).all(|pair| pair[0] < pair[1]);
            if !valid {
                return Err(D::Error::custom(ConfigError::Wavelengths));
            }
        }

        if helper.threads == Some(0) {
            return Err(D::Error::custom(ConfigError::Threads));
        }

        if helper.nodata.is_some_and(|value| !value.is_finite()) {
            return Err(D::Error::custom(ConfigError::Nodata));
        }

        Ok(Config {
            input: helper.input,
            fu_table: helper.fu_table,
            cmf_table: helper.cmf_table,
            wavelengths: helper.wavelengths,
            output: helper.output,
            threads: helper.threads,
            nodata: helper.nodata,
        })
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn fu_table(&self) -> &Path {
        &self.fu_table
    }

    pub fn cmf_table(&self) -> Option<&Path> {
        self.cmf_table.as_deref()
    }

    pub fn wavelengths(&self) -> Option<&[f64]> {
        self.wavelengths.as_deref()
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }
}
