//! Precomputed kernel coefficient tables.

use crate::Kernel;

/// 5x5 Gaussian coefficients with sigma^2 == 3, row-major.
///
/// Generated from
/// `exp(-0.5 * (((x - mean) / sigma)^2 + ((y - mean) / sigma)^2)) / (2 * pi * sigma^2)`
/// and kept verbatim; the weights sum to ~1.0.
const GAUSSIAN_5X5: [f32; 25] = [
    0.01905031014488527, 0.03140865154930652, 0.03710493756184187, 0.03140865154930652, 0.01905031014488527,
    0.03140865154930652, 0.05178411189334978, 0.06117569980620832, 0.05178411189334978, 0.03140865154930652,
    0.03710493756184187, 0.06117569980620832, 0.07227054998040688, 0.06117569980620832, 0.03710493756184187,
    0.03140865154930652, 0.05178411189334978, 0.06117569980620832, 0.05178411189334978, 0.03140865154930652,
    0.01905031014488527, 0.03140865154930652, 0.03710493756184187, 0.03140865154930652, 0.01905031014488527,
];

/// The reference 5x5 Gaussian blur kernel.
pub fn gaussian_5x5() -> Kernel {
    Kernel::new(GAUSSIAN_5X5.to_vec(), 5).expect("reference kernel table is well-formed")
}
