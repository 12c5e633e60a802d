pub mod analytic;
pub mod cmf;
pub mod fu_angles;
pub mod loader;

// Re-export the main structures for convenience
pub use cmf::{CmfTable, CmfWindow};
pub use fu_angles::{FuAngleTable, FuBoundary};
pub use loader::{TableLoadError, load_cmf_table, load_fu_angle_table};
