use egui::Pos2;

use crate::surface::Surface;
use crate::tools::ToolKind;

/// Where the pointer is and what it is doing, relative to the canvas.
///
/// `on_surface` and `pointer_down` change independently; the current tool lives
/// in the [`crate::tools::ToolRegistry`] and never changes through pointer input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorState {
    on_surface: bool,
    pointer_down: bool,
    position: Pos2,
    /// The newest committed drawable is still receiving points
    drawing: bool,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, position: Pos2) {
        self.on_surface = true;
        self.position = position;
    }

    pub fn leave(&mut self) {
        self.on_surface = false;
    }

    /// Pointer pressed at `position`; the caller commits the new drawable
    pub fn press(&mut self, position: Pos2) {
        self.on_surface = true;
        self.pointer_down = true;
        self.position = position;
        self.drawing = true;
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn release(&mut self) {
        self.pointer_down = false;
        self.detach();
    }

    /// Stop feeding points to the in-progress drawable
    pub fn detach(&mut self) {
        self.drawing = false;
    }

    pub fn on_surface(&self) -> bool {
        self.on_surface
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Whether a pointer event at the current phase should repaint the canvas
    pub fn wants_redraw(&self) -> bool {
        self.pointer_down || self.on_surface
    }

    /// Tool indicator that follows a hovering pointer. Hidden while dragging or off-canvas.
    pub fn render_preview<S: Surface + ?Sized>(&self, surface: &mut S, tool: &ToolKind) {
        if !self.on_surface || self.pointer_down {
            return;
        }
        match tool {
            ToolKind::Marker { thickness } => surface.fill_circle(self.position, *thickness as f32),
            ToolKind::Sticker { glyph } => surface.fill_text(glyph, self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_preview_only_while_hovering() {
        let tool = ToolKind::Marker { thickness: 3 };
        let mut surface = RecordingSurface::new();
        let mut cursor = CursorState::new();

        cursor.render_preview(&mut surface, &tool);
        assert!(surface.ops().is_empty());

        cursor.enter(Pos2::new(4.0, 5.0));
        cursor.render_preview(&mut surface, &tool);
        assert_eq!(
            surface.take_ops(),
            vec![SurfaceOp::FillCircle {
                center: Pos2::new(4.0, 5.0),
                radius: 3.0,
            }]
        );

        cursor.press(Pos2::new(4.0, 5.0));
        cursor.render_preview(&mut surface, &tool);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_sticker_preview_draws_glyph() {
        let tool = ToolKind::sticker("🚀");
        let mut surface = RecordingSurface::new();
        let mut cursor = CursorState::new();

        cursor.enter(Pos2::new(12.0, 7.0));
        cursor.render_preview(&mut surface, &tool);
        assert_eq!(
            surface.take_ops(),
            vec![SurfaceOp::FillText {
                text: "🚀".to_owned(),
                center: Pos2::new(12.0, 7.0),
                size: 24.0,
            }]
        );

        cursor.leave();
        cursor.render_preview(&mut surface, &tool);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_release_detaches() {
        let mut cursor = CursorState::new();
        cursor.press(Pos2::new(1.0, 1.0));
        assert!(cursor.is_drawing());
        cursor.release();
        assert!(!cursor.is_drawing());
        assert!(!cursor.pointer_down());
        assert!(cursor.on_surface());
    }
}
