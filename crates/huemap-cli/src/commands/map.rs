//! Hue remap command

use crate::io::{read_png, write_png};
use crate::settings::MapSettings;
use crate::MapArgs;
use anyhow::{Context, Result};
use huemap_core::{ImageView, PixelLayout};
use huemap_ops::{flatten, remap_par, remap_with, RemapObserver};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: MapArgs, verbose: u8) -> Result<()> {
    let settings = MapSettings::resolve(&args)?;
    if let Some(path) = &args.save_config {
        settings.save(path)?;
        if verbose > 0 {
            println!("Saved settings to {}", path.display());
        }
    }

    let gradient = super::load_gradient(settings.gradient.as_deref())?;
    let table = super::hue_table(&gradient, settings.num_samples, settings.reverse)?;

    let image = read_png(&args.input)?;
    if verbose > 0 {
        println!(
            "Remapping {} ({}x{} {}) through '{}'",
            args.input.display(),
            image.width,
            image.height,
            image.layout,
            gradient.name()
        );
    }

    let view = ImageView::with_layout(&image.data, image.width, image.height, image.layout)
        .with_context(|| format!("Invalid image: {}", args.input.display()))?;

    let result = if args.parallel {
        remap_par(&view, &table)?
    } else {
        let mut next_report = 0.1;
        let mut observer = RemapObserver::new().on_progress(|fraction| {
            if fraction >= next_report {
                debug!(percent = (fraction * 100.0).round() as u32, "remap progress");
                next_report += 0.1;
            }
        });
        remap_with(&view, &table, &mut observer)?
    };

    if settings.flatten {
        let rgb = flatten(&result, settings.background);
        write_png(&args.output, result.width(), result.height(), PixelLayout::Rgb, &rgb)?;
    } else {
        write_png(&args.output, result.width(), result.height(), PixelLayout::Rgba, result.data())?;
    }

    info!(output = %args.output.display(), flatten = settings.flatten, "done");
    if verbose > 0 {
        println!("Done.");
    }
    Ok(())
}
