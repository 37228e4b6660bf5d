//! Kernel type and 2D spatial convolution.
//!
//! [`convolve`] reads every neighborhood from an immutable source buffer
//! and writes results into a fresh output image, so the pass is
//! order-independent: a pixel never sees an already-filtered neighbor.
//! Samples falling outside the image contribute `{0, 0, 0}` (zero
//! padding), which dilutes border pixels toward black instead of
//! repeating edge values.
//!
//! # Example
//!
//! ```rust
//! use pxm_io::{PpmImage, Rgb};
//! use pxm_ops::{convolve, kernels};
//!
//! let mut img = PpmImage::new(8, 8);
//! img.set_pixel(4, 4, Rgb { r: 255, g: 255, b: 255 });
//!
//! let blurred = convolve(&img, &kernels::gaussian_5x5());
//! assert!(blurred.get_pixel(4, 4).r < 255);
//! ```

use crate::{OpsError, OpsResult};
use pxm_io::{PpmImage, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Square convolution kernel with an odd side length.
///
/// The weight sum is computed once at construction (row-major order over
/// the weights) and reused for normalization; it is guaranteed positive.
#[derive(Debug, Clone)]
pub struct Kernel {
    data: Vec<f32>,
    size: usize,
    sum: f32,
}

impl Kernel {
    /// Creates a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] if `size` is even, `data` does
    /// not hold exactly `size * size` weights, or the weights do not sum
    /// to a positive value.
    pub fn new(data: Vec<f32>, size: usize) -> OpsResult<Self> {
        if size % 2 == 0 {
            return Err(OpsError::InvalidKernel(
                "kernel side length must be odd".into(),
            ));
        }
        if data.len() != size * size {
            return Err(OpsError::InvalidKernel(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                size,
                size
            )));
        }
        let sum: f32 = data.iter().sum();
        if !(sum > 0.0) {
            return Err(OpsError::InvalidKernel(format!(
                "kernel weights must sum to a positive value, got {}",
                sum
            )));
        }
        Ok(Self { data, size, sum })
    }

    /// Side length of the kernel.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Kernel radius (half the side length, truncated).
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Precomputed sum of all weights.
    #[inline]
    pub fn sum(&self) -> f32 {
        self.sum
    }

    /// Weight at kernel cell (kx, ky).
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.data[ky * self.size + kx]
    }

    /// All weights in row-major order.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.data
    }
}

/// Convolves an image with a kernel, returning the filtered image.
///
/// The output keeps the source's dimensions, comment and max value. For
/// each output pixel the kernel is centered on the source pixel,
/// out-of-bounds samples are zero-padded, per-channel f32 sums are
/// accumulated over the kernel cells, divided by the kernel's weight sum
/// and truncated to u8 (fractional part discarded).
pub fn convolve(image: &PpmImage, kernel: &Kernel) -> PpmImage {
    trace!(
        width = image.width(),
        height = image.height(),
        kernel = kernel.size(),
        "convolve"
    );

    let width = image.width();
    let height = image.height();
    let radius = kernel.radius() as i64;

    let mut out = image.clone();
    for y in 0..height {
        for x in 0..width {
            let mut r_sum = 0.0f32;
            let mut g_sum = 0.0f32;
            let mut b_sum = 0.0f32;

            for ky in 0..kernel.size() {
                for kx in 0..kernel.size() {
                    let sx = i64::from(x) - radius + kx as i64;
                    let sy = i64::from(y) - radius + ky as i64;

                    // Zero padding: out-of-bounds samples contribute nothing.
                    if sx < 0 || sy < 0 || sx >= i64::from(width) || sy >= i64::from(height) {
                        continue;
                    }

                    let pixel = image.get_pixel(sx as u32, sy as u32);
                    let weight = kernel.weight(kx, ky);
                    r_sum += f32::from(pixel.r) * weight;
                    g_sum += f32::from(pixel.g) * weight;
                    b_sum += f32::from(pixel.b) * weight;
                }
            }

            out.set_pixel(
                x,
                y,
                Rgb {
                    r: normalize(r_sum, kernel.sum()),
                    g: normalize(g_sum, kernel.sum()),
                    b: normalize(b_sum, kernel.sum()),
                },
            );
        }
    }

    out
}

/// Divides an accumulated channel sum by the kernel sum and truncates.
#[inline]
fn normalize(sum: f32, kernel_sum: f32) -> u8 {
    (sum / kernel_sum) as u8
}
