use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::process::Command;

fn huemap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_huemap"))
}

fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, data: &[u8]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
}

fn read_png(path: &Path) -> (png::ColorType, Vec<u8>) {
    let decoder = png::Decoder::new(BufReader::new(File::open(path).unwrap()));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size().unwrap()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info.color_type, buf)
}

#[test]
fn map_snaps_to_rainbow_bands() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    // orange, gray, violet
    write_png(&input, 3, 1, png::ColorType::Rgb, &[255, 128, 0, 128, 128, 128, 140, 0, 255]);

    let status = huemap().arg("map").arg(&input).arg("-o").arg(&output).status().unwrap();
    assert!(status.success());

    let (color, data) = read_png(&output);
    assert_eq!(color, png::ColorType::Rgba);
    assert_eq!(data, vec![255, 0, 0, 255, 128, 128, 128, 255, 0, 0, 255, 255]);
}

#[test]
fn map_flatten_parallel_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let config = dir.path().join("look.yaml");
    write_png(&input, 2, 1, png::ColorType::Rgba, &[0, 0, 255, 255, 255, 0, 0, 0]);

    let status = huemap()
        .args(["map", "--flatten", "--background", "0,0,0", "--parallel"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--save-config")
        .arg(&config)
        .status()
        .unwrap();
    assert!(status.success());
    let (color, data) = read_png(&output);
    assert_eq!(color, png::ColorType::Rgb);
    assert_eq!(data, vec![0, 0, 255, 0, 0, 0]);

    // Saved settings reproduce the run
    let again = dir.path().join("again.png");
    let status = huemap()
        .arg("map")
        .arg(&input)
        .arg("-o")
        .arg(&again)
        .arg("--config")
        .arg(&config)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(read_png(&again).1, data);
}

#[test]
fn gradient_file_feeds_map() {
    let dir = tempfile::tempdir().unwrap();
    let ggr = dir.path().join("rainbow.ggr");
    let status = huemap().arg("gradient").arg("-o").arg(&ggr).args(["--name", "Bands"]).status().unwrap();
    assert!(status.success());
    let text = std::fs::read_to_string(&ggr).unwrap();
    assert!(text.starts_with("GIMP Gradient\nName: Bands\n6\n"));

    let out = huemap().arg("table").arg("-g").arg(&ggr).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Slots:    1536"));
    assert!(stdout.contains("Hues:     6"));
}

#[test]
fn bad_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = huemap()
        .arg("map")
        .arg(dir.path().join("missing.png"))
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.png"));

    let out = huemap().args(["table", "--samples", "0"]).output().unwrap();
    assert!(!out.status.success());
}
