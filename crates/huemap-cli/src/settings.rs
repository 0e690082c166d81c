//! Persistent remap settings.
//!
//! A [`MapSettings`] file captures everything that shapes a `map` run apart
//! from the input and output paths:
//!
//! ```yaml
//! gradient: sunset.ggr
//! num_samples: 1536
//! reverse: false
//! flatten: true
//! background: [255, 255, 255]
//! ```
//!
//! Missing keys take their defaults. Relative gradient paths are resolved
//! against the settings file's directory.

use anyhow::{bail, Context, Result};
use huemap_gradient::DEFAULT_NUM_SAMPLES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::MapArgs;

/// Settings for one remap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Gradient file; `None` selects the built-in rainbow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<PathBuf>,
    /// Lookup table size
    pub num_samples: usize,
    /// Read the gradient from right to left
    pub reverse: bool,
    /// Composite onto `background` and drop alpha
    pub flatten: bool,
    /// Opaque background for flattening
    pub background: [u8; 3],
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            gradient: None,
            num_samples: DEFAULT_NUM_SAMPLES,
            reverse: false,
            flatten: false,
            background: [255, 255, 255],
        }
    }
}

impl MapSettings {
    /// Loads settings from YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let mut settings: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid settings: {}", path.display()))?;

        if let (Some(gradient), Some(dir)) = (settings.gradient.as_mut(), path.parent()) {
            if gradient.is_relative() {
                *gradient = dir.join(&*gradient);
            }
        }
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Saves settings as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_yaml::to_string(self).context("Failed to serialize settings")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Settings for a `map` invocation: the `--config` file (or defaults)
    /// with every flag given on the command line applied on top.
    pub fn resolve(args: &MapArgs) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(gradient) = &args.gradient {
            settings.gradient = Some(gradient.clone());
        }
        if let Some(n) = args.samples {
            settings.num_samples = n;
        }
        if let Some(bg) = args.background {
            settings.background = bg;
        }
        settings.reverse |= args.reverse;
        settings.flatten |= args.flatten;

        if settings.num_samples == 0 {
            bail!("num_samples must be greater than 0");
        }
        Ok(settings)
    }
}

/// Parses `R,G,B` with each component in `0..=255`.
pub fn parse_rgb(s: &str) -> std::result::Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got '{}'", s));
    };
    let channel = |v: &str| v.parse::<u8>().map_err(|_| format!("invalid channel '{}' (0-255)", v));
    Ok([channel(*r)?, channel(*g)?, channel(*b)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> MapArgs {
        MapArgs {
            input: "in.png".into(),
            output: "out.png".into(),
            gradient: None,
            samples: None,
            reverse: false,
            flatten: false,
            background: None,
            config: None,
            save_config: None,
            parallel: false,
        }
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("0,128,255"), Ok([0, 128, 255]));
        assert_eq!(parse_rgb(" 1, 2 ,3"), Ok([1, 2, 3]));
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,256").is_err());
        assert!(parse_rgb("red").is_err());
    }

    #[test]
    fn test_defaults_without_config() {
        let s = MapSettings::resolve(&args()).unwrap();
        assert_eq!(s, MapSettings::default());
        assert_eq!(s.num_samples, 1536);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let s: MapSettings = serde_yaml::from_str("flatten: true\n").unwrap();
        assert!(s.flatten);
        assert_eq!(s.num_samples, DEFAULT_NUM_SAMPLES);
        assert_eq!(s.background, [255, 255, 255]);
    }

    #[test]
    fn test_save_load_and_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.yaml");
        let saved = MapSettings {
            gradient: Some("sunset.ggr".into()),
            num_samples: 360,
            reverse: true,
            flatten: true,
            background: [0, 0, 0],
        };
        saved.save(&path).unwrap();

        let loaded = MapSettings::load(&path).unwrap();
        assert_eq!(loaded.gradient, Some(dir.path().join("sunset.ggr")));
        assert_eq!(loaded.num_samples, 360);

        let mut a = args();
        a.config = Some(path);
        a.samples = Some(720);
        a.background = Some([10, 20, 30]);
        let s = MapSettings::resolve(&a).unwrap();
        assert_eq!(s.num_samples, 720);
        assert_eq!(s.background, [10, 20, 30]);
        assert!(s.reverse && s.flatten);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut a = args();
        a.samples = Some(0);
        assert!(MapSettings::resolve(&a).is_err());
    }
}
