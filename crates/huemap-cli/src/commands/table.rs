//! Lookup table inspection

use crate::TableArgs;
use anyhow::Result;

pub fn run(args: TableArgs, verbose: u8) -> Result<()> {
    let gradient = super::load_gradient(args.gradient.as_deref())?;
    let table = super::hue_table(&gradient, args.samples, args.reverse)?;
    let runs = table.runs();

    println!("Gradient: {}", gradient.name());
    println!("Slots:    {}", table.len());
    println!("Hues:     {}", runs.len());
    if verbose > 0 || runs.len() <= 64 {
        println!();
        for (first, last, hue) in runs {
            println!("  [{:>5} .. {:>5}]  {:>8.4}  {:>6.1} deg", first, last, hue, hue * 360.0);
        }
    }
    Ok(())
}
