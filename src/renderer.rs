use crate::config::SketchConfig;
use crate::cursor::CursorState;
use crate::drawable::Drawable;
use crate::history::CommandHistory;
use crate::surface::{Surface, SurfaceStyle};
use crate::tools::ToolKind;

/// Redraws the canvas from scratch out of the committed history
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: SurfaceStyle,
}

impl Renderer {
    pub fn new(style: SurfaceStyle) -> Self {
        Self { style }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(SurfaceStyle {
            font_size: config.sticker_font_size,
            ink: config.ink_color(),
            background: config.background_color(),
            ..SurfaceStyle::default()
        })
    }

    /// Ambient style for a fresh surface at `scale`
    pub fn style_at(&self, scale: f32) -> SurfaceStyle {
        SurfaceStyle { scale, ..self.style }
    }

    /// Full redraw: wipe, committed drawables oldest first, then the cursor preview on top
    pub fn redraw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        history: &CommandHistory,
        cursor: &CursorState,
        tool: &ToolKind,
    ) {
        let scale = surface.style().scale;
        *surface.style_mut() = self.style_at(scale);
        surface.clear();
        Self::render_committed(surface, history.committed());
        cursor.render_preview(surface, tool);
    }

    /// Paint `drawables` in order without clearing or preview
    pub fn render_committed<S: Surface + ?Sized>(surface: &mut S, drawables: &[Drawable]) {
        for drawable in drawables {
            drawable.render(surface);
        }
    }
}
