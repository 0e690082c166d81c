//! CLI command implementations

pub mod gradient;
pub mod map;
pub mod table;

use anyhow::{Context, Result};
use huemap_gradient::{build_hue_table, build_hue_table_reversed, ggr, Gradient, HueTable};
use std::path::Path;

/// Loads a `.ggr` gradient, or the built-in rainbow when no path is given.
pub fn load_gradient(path: Option<&Path>) -> Result<Gradient> {
    match path {
        Some(path) => ggr::read(path).with_context(|| format!("Failed to load gradient: {}", path.display())),
        None => Ok(Gradient::rainbow()),
    }
}

/// Builds the lookup table for `gradient`.
pub fn hue_table(gradient: &Gradient, num_samples: usize, reverse: bool) -> Result<HueTable> {
    let table = if reverse {
        build_hue_table_reversed(gradient, num_samples)
    } else {
        build_hue_table(gradient, num_samples)
    };
    table.with_context(|| format!("Failed to sample gradient '{}'", gradient.name()))
}
