use egui::Pos2;

use super::{Surface, SurfaceStyle};

/// A single primitive issued to a [`RecordingSurface`], in device coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    StrokePath { points: Vec<Pos2>, width: f32 },
    FillText { text: String, center: Pos2, size: f32 },
    FillCircle { center: Pos2, radius: f32 },
}

/// Surface that keeps a log of what was drawn instead of producing pixels.
///
/// Used to check draw order and geometry without a GPU or a font.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    style: SurfaceStyle,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the log, leaving the surface ready for the next frame
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::StrokePath { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SurfaceStyle {
        &mut self.style
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        let points = points.iter().map(|p| self.to_device(*p)).collect();
        let width = self.style.line_width * self.style.scale;
        self.ops.push(SurfaceOp::StrokePath { points, width });
    }

    fn fill_text(&mut self, text: &str, center: Pos2) {
        let center = self.to_device(center);
        let size = self.style.font_size * self.style.scale;
        self.ops.push(SurfaceOp::FillText {
            text: text.to_owned(),
            center,
            size,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        let center = self.to_device(center);
        let radius = radius * self.style.scale;
        self.ops.push(SurfaceOp::FillCircle { center, radius });
    }
}
