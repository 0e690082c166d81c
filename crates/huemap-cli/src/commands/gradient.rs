//! Default gradient export

use crate::GradientArgs;
use anyhow::{Context, Result};
use huemap_gradient::{ggr, Gradient};

pub fn run(args: GradientArgs, verbose: u8) -> Result<()> {
    let mut gradient = Gradient::rainbow();
    if let Some(name) = args.name {
        gradient.set_name(name);
    }

    ggr::write(&args.output, &gradient)
        .with_context(|| format!("Failed to save gradient: {}", args.output.display()))?;

    if verbose > 0 {
        println!(
            "Wrote '{}' ({} segments) to {}",
            gradient.name(),
            gradient.len(),
            args.output.display()
        );
    }
    Ok(())
}
