use egui::{Align2, FontId, Painter, Pos2, Rect, Shape, Stroke};

use super::{Surface, SurfaceStyle};

/// Adapts an egui [`Painter`] to the [`Surface`] contract.
///
/// Coordinates are surface-local; the canvas rect's origin is added when
/// painting and everything is clipped to the canvas.
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
    style: SurfaceStyle,
}

impl PainterSurface {
    pub fn new(painter: &Painter, rect: Rect, style: SurfaceStyle) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
            style,
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + self.to_device(point).to_vec2()
    }
}

impl Surface for PainterSurface {
    fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SurfaceStyle {
        &mut self.style
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.style.background);
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::line(
            points,
            Stroke::new(self.style.line_width * self.style.scale, self.style.ink),
        ));
    }

    fn fill_text(&mut self, text: &str, center: Pos2) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(self.style.font_size * self.style.scale),
            self.style.ink,
        );
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        self.painter.circle_filled(
            self.to_screen(center),
            radius * self.style.scale,
            self.style.ink,
        );
    }
}
