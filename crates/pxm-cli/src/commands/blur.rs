//! Blur command
//!
//! Applies the fixed 5x5 Gaussian kernel and times the convolution pass.

use crate::BlurArgs;
use anyhow::Result;
use pxm_ops::{convolve, kernels};
use std::time::Instant;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BlurArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "blur::run");

    let image = super::load_image(&args.input)?;

    info!(w = image.width(), h = image.height(), "Applying gaussian blur");

    if verbose {
        println!(
            "Applying 5x5 gaussian blur to {} ({}x{})",
            args.input.display(),
            image.width(),
            image.height()
        );
    }

    let kernel = kernels::gaussian_5x5();
    let start = Instant::now();
    let blurred = convolve(&image, &kernel);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(elapsed_ms, "convolution pass finished");

    if verbose {
        println!("Convolution time: {:.3} ms", elapsed_ms);
    }

    super::save_image(&args.output, &blurred)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
