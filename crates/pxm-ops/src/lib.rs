//! # pxm-ops
//!
//! Fixed-kernel 2D spatial convolution over [`pxm_io::PpmImage`] buffers.
//!
//! The engine consumes a validated square [`Kernel`] of odd side length
//! and produces a new filtered image; the source buffer is never mutated.
//! Borders are zero-padded and the final per-channel normalization
//! truncates, matching a direct float-to-integer cast.
//!
//! # Example
//!
//! ```rust,ignore
//! use pxm_ops::{convolve, kernels};
//!
//! let image = pxm_io::ppm::read("input.ppm")?;
//! let blurred = convolve(&image, &kernels::gaussian_5x5());
//! pxm_io::ppm::write("output.ppm", &blurred)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod filter;
pub mod kernels;

pub use error::{OpsError, OpsResult};
pub use filter::{Kernel, convolve};
