//! Constants of the Forel-Ule hue-angle classification

/// Chromaticity of the equal-energy white point, used for both x and y.
pub const WHITE_POINT: f64 = 1.0 / 3.0;

/// Class assigned to pixels whose hue angle is undefined (NaN).
pub const FU_UNDEFINED: u8 = 0;

/// Bluest class, assigned at or above the first boundary angle.
pub const FU_MIN: u8 = 1;

/// Brownest class, assigned at or below the last boundary angle.
pub const FU_MAX: u8 = 21;
