use egui::{Color32, Pos2};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::{GlyphFonts, RasterSurface};
pub use recording::{RecordingSurface, SurfaceOp};

/// Ambient drawing state of a surface, in the spirit of a 2D canvas context.
///
/// Drawing primitives read the current line width and font size from here. A
/// caller that needs a different value overrides it and restores it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub line_width: f32,
    pub font_size: f32,
    /// Uniform transform applied to every coordinate, width and font size
    pub scale: f32,
    pub ink: Color32,
    pub background: Color32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            font_size: 24.0,
            scale: 1.0,
            ink: Color32::BLACK,
            background: Color32::WHITE,
        }
    }
}

/// A raster drawing target the sketch can be rendered onto
pub trait Surface {
    fn style(&self) -> &SurfaceStyle;

    fn style_mut(&mut self) -> &mut SurfaceStyle;

    /// Wipe the whole surface back to its background
    fn clear(&mut self);

    /// Stroke an open polyline through `points` at the ambient line width
    fn stroke_path(&mut self, points: &[Pos2]);

    /// Draw `text` centered on `center` at the ambient font size
    fn fill_text(&mut self, text: &str, center: Pos2);

    fn fill_circle(&mut self, center: Pos2, radius: f32);

    fn line_width(&self) -> f32 {
        self.style().line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.style_mut().line_width = width;
    }

    fn set_font_size(&mut self, size: f32) {
        self.style_mut().font_size = size;
    }

    fn set_scale(&mut self, scale: f32) {
        self.style_mut().scale = scale;
    }

    /// Map a logical point through the surface's scale transform
    fn to_device(&self, point: Pos2) -> Pos2 {
        (point.to_vec2() * self.style().scale).to_pos2()
    }
}
