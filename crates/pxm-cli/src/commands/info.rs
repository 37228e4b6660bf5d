//! Info command
//!
//! Prints dimensions, max channel value and the header comment.

use crate::InfoArgs;
use anyhow::Result;

pub fn run(args: InfoArgs, _verbose: bool) -> Result<()> {
    for path in &args.input {
        let image = super::load_image(path)?;
        println!(
            "{}: {} x {}, 3 channel, max value {}",
            path.display(),
            image.width(),
            image.height(),
            image.max_value()
        );
        if !image.comment().is_empty() {
            println!("  comment: {}", image.comment());
        }
    }
    Ok(())
}
