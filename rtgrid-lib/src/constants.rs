/// Micron to centimeter.
pub const MICRON: f64 = 1.0e-4;

/// Nanometer to centimeter.
pub const NANOMETER: f64 = 1.0e-7;

/// Angstrom to centimeter.
pub const ANGSTROM: f64 = 1.0e-8;

/// Kilometer to centimeter.
pub const KILOMETER: f64 = 1.0e5;
