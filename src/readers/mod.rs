pub mod delimited;
pub mod geotiff;
pub mod tsv;
pub mod types;
pub mod utils;

pub use geotiff::GeoTiffReader;
pub use tsv::TsvReader;
pub use types::{DataReader, FileError, FileType, ReadError, SpectralData};
pub use utils::reader_from_filetype;

pub fn create_reader(file_name: String) -> Result<Box<dyn DataReader>, FileError> {
    match reader_from_filetype(file_name.as_ref()) {
        Ok(FileType::GeoTiff) => Ok(Box::new(GeoTiffReader { file_name })),
        Ok(FileType::Tsv) => Ok(Box::new(TsvReader { file_name })),
        Err(e) => Err(e),
    }
}
