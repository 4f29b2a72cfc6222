use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use log::info;

use crate::config::SketchConfig;
use crate::drawable::Drawable;
use crate::error::{ExportError, ExportResult};
use crate::renderer::Renderer;
use crate::surface::{GlyphFonts, RasterSurface};

mod deliver;

/// An encoded export ready to hand to the host
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Renders the committed drawables onto an off-screen raster at a fixed
/// multiple of the canvas size and encodes it as PNG.
#[derive(Debug, Clone)]
pub struct Exporter {
    renderer: Renderer,
    scale: f32,
    file_name: String,
    fonts: GlyphFonts,
}

impl Exporter {
    pub fn new(renderer: Renderer, scale: f32, file_name: &str) -> Self {
        Self {
            renderer,
            scale,
            file_name: file_name.to_owned(),
            fonts: GlyphFonts::from_egui_defaults(),
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(
            Renderer::from_config(config),
            config.export.scale,
            &config.export.file_name,
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Rasterize `drawables` for a canvas of `width` x `height` pixels
    pub fn render(&self, drawables: &[Drawable], width: u32, height: u32) -> ExportResult<RgbaImage> {
        let scaled_width = (width as f32 * self.scale).round() as u32;
        let scaled_height = (height as f32 * self.scale).round() as u32;
        if scaled_width == 0 || scaled_height == 0 {
            return Err(ExportError::EmptyCanvas {
                width: scaled_width,
                height: scaled_height,
            });
        }

        let mut surface = RasterSurface::new(
            scaled_width,
            scaled_height,
            self.renderer.style_at(self.scale),
            self.fonts.clone(),
        );
        Renderer::render_committed(&mut surface, drawables);
        Ok(surface.into_image())
    }

    pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render and encode in one go
    pub fn export(&self, drawables: &[Drawable], width: u32, height: u32) -> ExportResult<ExportedImage> {
        let image = self.render(drawables, width, height)?;
        let png = Self::encode_png(&image)?;
        info!(
            "Exported {} drawables as {}x{} '{}' ({} bytes)",
            drawables.len(),
            image.width(),
            image.height(),
            self.file_name,
            png.len()
        );
        Ok(ExportedImage {
            file_name: self.file_name.clone(),
            width: image.width(),
            height: image.height(),
            png,
        })
    }
}
