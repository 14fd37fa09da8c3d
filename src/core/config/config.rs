use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};

use crate::tower::{TowerKind, DEFAULT_COLOR};

/// Where the tower document lives and where icons go.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Tower document; read at start and rewritten in place at the end.
    pub input: PathBuf,
    /// Directory receiving one SVG per tower.
    pub output_dir: PathBuf,
    /// Prefix recorded in each tower's `image` field (always joined with `/`).
    pub image_prefix: String,
}
impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("towers.json"),
            output_dir: PathBuf::from("img/towers"),
            image_prefix: "img/towers".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    /// Tower type -> hex color.
    pub colors: BTreeMap<String, String>,
    /// Used for unknown types and for towers without a type.
    pub default_color: String,
    /// Effective type of towers whose `type` is absent or empty.
    pub default_type: String,
}
impl Default for PaletteConfig {
    fn default() -> Self {
        let colors = TowerKind::ALL
            .into_iter()
            .map(|k| (k.as_str().to_string(), k.default_color().to_string()))
            .collect();
        Self {
            colors,
            default_color: DEFAULT_COLOR.into(),
            default_type: TowerKind::Utility.as_str().into(),
        }
    }
}

/// Icon geometry. The canvas is square; circle and label are centered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct IconConfig {
    pub size: u32,
    pub radius: u32,
    pub font_size: u32,
    pub font_family: String,
    pub stroke: String,
    pub stroke_width: u32,
}
impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 120,
            radius: 50,
            font_size: 48,
            font_family: "Arial, sans-serif".into(),
            stroke: "#333".into(),
            stroke_width: 3,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    pub paths: PathsConfig,
    pub palette: PaletteConfig,
    pub icon: IconConfig,
}

impl GeneratorConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.paths.input.as_os_str().is_empty() {
            w.push("paths.input is empty".into());
        }
        if self.paths.output_dir.as_os_str().is_empty() {
            w.push("paths.output_dir is empty; icons land in the working directory".into());
        }
        if self.paths.image_prefix.ends_with('/') {
            w.push(format!(
                "paths.image_prefix '{}' ends with '/'; image paths will contain '//'",
                self.paths.image_prefix
            ));
        }
        for (ty, color) in &self.palette.colors {
            if !is_hex_color(color) {
                w.push(format!("palette.colors[{ty}] '{color}' is not a #rgb/#rrggbb color"));
            }
        }
        if !is_hex_color(&self.palette.default_color) {
            w.push(format!(
                "palette.default_color '{}' is not a #rgb/#rrggbb color",
                self.palette.default_color
            ));
        }
        if self.palette.default_type.trim().is_empty() {
            w.push("palette.default_type is empty".into());
        }
        if self.icon.size == 0 {
            w.push("icon.size must be > 0".into());
        }
        if self.icon.radius == 0 {
            w.push("icon.radius must be > 0".into());
        }
        if u64::from(self.icon.radius) * 2 > u64::from(self.icon.size) {
            w.push(format!(
                "icon.radius {} exceeds half of icon.size {}; circle will be clipped",
                self.icon.radius, self.icon.size
            ));
        }
        if self.icon.font_size == 0 {
            w.push("icon.font_size must be > 0".into());
        }
        w
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
