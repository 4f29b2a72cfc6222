use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable consulted for a config path when none is passed on the command line
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// A marker entry in the toolbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub label: String,
    pub thickness: u32,
}

impl MarkerConfig {
    pub fn new(label: &str, thickness: u32) -> Self {
        Self {
            label: label.to_owned(),
            thickness,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Multiple of the canvas size used for the exported raster
    pub scale: f32,
    pub file_name: String,
    /// Directory the native build writes exports into
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 4.0,
            file_name: "sketchpad.png".to_owned(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Everything the sketchpad can be configured with.
///
/// Missing fields fall back to their defaults, so a config file only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub markers: Vec<MarkerConfig>,
    pub stickers: Vec<String>,
    pub sticker_font_size: f32,
    /// RGBA, unmultiplied
    pub ink: [u8; 4],
    /// RGBA, unmultiplied
    pub background: [u8; 4],
    pub export: ExportConfig,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Draw a Little Bit".to_owned(),
            canvas_width: 256,
            canvas_height: 256,
            markers: vec![MarkerConfig::new("Thin", 2), MarkerConfig::new("Thick", 6)],
            stickers: vec!["🌸".to_owned(), "🌟".to_owned(), "🚀".to_owned()],
            sticker_font_size: 24.0,
            ink: [0, 0, 0, 255],
            background: [255, 255, 255, 255],
            export: ExportConfig::default(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Resolve the config from an explicit path, then [`CONFIG_ENV_VAR`], then defaults
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must have a non-zero size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.markers.is_empty() && self.stickers.is_empty() {
            return Err(ConfigError::Invalid("at least one tool is required".to_owned()));
        }
        if let Some(marker) = self.markers.iter().find(|m| m.thickness == 0) {
            return Err(ConfigError::Invalid(format!(
                "marker '{}' has zero thickness",
                marker.label
            )));
        }
        if self.stickers.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid("sticker glyphs must not be empty".to_owned()));
        }
        if self.sticker_font_size.is_nan() || self.sticker_font_size <= 0.0 {
            return Err(ConfigError::Invalid("sticker font size must be positive".to_owned()));
        }
        if self.export.scale.is_nan() || self.export.scale < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "export scale must be at least 1, got {}",
                self.export.scale
            )));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export file name must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }

    pub fn ink_color(&self) -> Color32 {
        let [r, g, b, a] = self.ink;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
