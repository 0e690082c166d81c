//! GIMP gradient (`.ggr`) file support.
//!
//! # Format
//!
//! ```text
//! GIMP Gradient
//! Name: Hue gradient
//! 6
//! 0 0.083333336 0.16666667 1 0 0 1 1 0 0 1 0 0 0 0
//! ...
//! ```
//!
//! Each segment line holds `left middle right`, the left RGBA color, the right
//! RGBA color, the blend function code and the color model code, optionally
//! followed by two endpoint color-source codes. Only fixed endpoint colors are
//! supported; other sources fall back to the stored color.
//!
//! Positions are written with shortest round-trip precision so a gradient read
//! back compares equal to the one written.
//!
//! # Example
//!
//! ```rust,ignore
//! use huemap_gradient::{ggr, Gradient};
//!
//! ggr::write("Hue gradient.ggr", &Gradient::rainbow())?;
//! let gradient = ggr::read("Hue gradient.ggr")?;
//! ```

use crate::gradient::validate_segments;
use crate::{BlendFunction, ColorModel, Gradient, GradientError, GradientResult, Segment};
use huemap_core::Rgba;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

const MAGIC: &str = "GIMP Gradient";

/// Reads a gradient from a `.ggr` file.
pub fn read<P: AsRef<Path>>(path: P) -> GradientResult<Gradient> {
    let file = File::open(path.as_ref())?;
    let gradient = parse(BufReader::new(file))?;
    debug!(
        path = %path.as_ref().display(),
        name = gradient.name(),
        segments = gradient.len(),
        "loaded gradient"
    );
    Ok(gradient)
}

/// Parses a gradient from `.ggr` text.
pub fn parse_str(text: &str) -> GradientResult<Gradient> {
    parse(text.as_bytes())
}

/// Parses a gradient from a reader.
pub fn parse<R: BufRead>(reader: R) -> GradientResult<Gradient> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, l)| l.map(|l| (i + 1, l)));

    let mut next_line = |what: &str| -> GradientResult<(usize, String)> {
        loop {
            match lines.next() {
                Some(Ok((n, l))) if l.trim().is_empty() => trace!(line = n, "skipping blank line"),
                Some(Ok((n, l))) => return Ok((n, l.trim().to_string())),
                Some(Err(e)) => return Err(e.into()),
                None => return Err(GradientError::parse(0, format!("unexpected end of file, expected {}", what))),
            }
        }
    };

    let (n, magic) = next_line("header")?;
    if magic != MAGIC {
        return Err(GradientError::parse(n, format!("expected '{}', found '{}'", MAGIC, magic)));
    }

    // Old files have no name line and go straight to the segment count
    let (mut n, mut line) = next_line("name or segment count")?;
    let mut name = String::from("Untitled");
    if let Some(rest) = line.strip_prefix("Name:") {
        name = rest.trim().to_string();
        (n, line) = next_line("segment count")?;
    }

    let count: usize = line
        .parse()
        .map_err(|_| GradientError::parse(n, format!("invalid segment count '{}'", line)))?;

    // count is untrusted; grow as lines are actually read
    let mut segments = Vec::new();
    let mut segment_lines = Vec::new();
    for _ in 0..count {
        let (n, line) = next_line("segment")?;
        segments.push(parse_segment(n, &line)?);
        segment_lines.push(n);
    }

    if let Err((index, msg)) = validate_segments(&segments) {
        let line = segment_lines.get(index).copied().unwrap_or(n);
        return Err(GradientError::parse(line, msg));
    }
    Gradient::new(name, segments)
}

fn parse_segment(n: usize, line: &str) -> GradientResult<Segment> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 13 && fields.len() != 15 {
        return Err(GradientError::parse(
            n,
            format!("expected 13 or 15 fields, found {}", fields.len()),
        ));
    }

    let mut floats = [0.0_f32; 11];
    for (slot, field) in floats.iter_mut().zip(&fields[..11]) {
        *slot = field
            .parse()
            .map_err(|_| GradientError::parse(n, format!("invalid number '{}'", field)))?;
    }
    let int = |field: &str| -> GradientResult<u32> {
        field
            .parse()
            .map_err(|_| GradientError::parse(n, format!("invalid code '{}'", field)))
    };

    let blend_code = int(fields[11])?;
    let blend = BlendFunction::from_code(blend_code)
        .ok_or_else(|| GradientError::parse(n, format!("unknown blend function {}", blend_code)))?;
    let model_code = int(fields[12])?;
    let model = ColorModel::from_code(model_code)
        .ok_or_else(|| GradientError::parse(n, format!("unknown color model {}", model_code)))?;

    if fields.len() == 15 {
        let (left_src, right_src) = (int(fields[13])?, int(fields[14])?);
        if left_src != 0 || right_src != 0 {
            debug!(line = n, left_src, right_src, "non-fixed endpoint colors, using stored colors");
        }
    }

    let [left, middle, right, lr, lg, lb, la, rr, rg, rb, ra] = floats;
    Ok(Segment {
        left,
        middle,
        right,
        left_color: Rgba::new(lr, lg, lb, la),
        right_color: Rgba::new(rr, rg, rb, ra),
        blend,
        model,
    })
}

/// Writes a gradient to a `.ggr` file.
pub fn write<P: AsRef<Path>>(path: P, gradient: &Gradient) -> GradientResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, gradient)?;
    writer.flush()?;
    Ok(())
}

/// Serializes a gradient to `.ggr` text.
pub fn to_string(gradient: &Gradient) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_to(&mut buf, gradient);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_to<W: Write>(writer: &mut W, gradient: &Gradient) -> std::io::Result<()> {
    writeln!(writer, "{}", MAGIC)?;
    writeln!(writer, "Name: {}", gradient.name())?;
    writeln!(writer, "{}", gradient.len())?;
    for seg in gradient.segments() {
        let (l, r) = (&seg.left_color, &seg.right_color);
        writeln!(
            writer,
            "{} {} {} {} {} {} {} {} {} {} {} {} {} 0 0",
            seg.left,
            seg.middle,
            seg.right,
            l.r,
            l.g,
            l.b,
            l.a,
            r.r,
            r.g,
            r.b,
            r.a,
            seg.blend.code(),
            seg.model.code()
        )?;
    }
    Ok(())
}
