use egui::Pos2;
use log::{debug, info};

use crate::config::SketchConfig;
use crate::cursor::CursorState;
use crate::drawable::Drawable;
use crate::error::ExportResult;
use crate::export::{ExportedImage, Exporter};
use crate::history::CommandHistory;
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::tools::{ToolId, ToolRegistry};

/// Everything the host can tell the sketchpad. Positions are canvas-local.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    PointerEnter(Pos2),
    PointerLeave,
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp(Pos2),
    SelectTool(ToolId),
    /// Result of the sticker prompt; `None` when the prompt was cancelled
    CreateSticker(Option<String>),
    Undo,
    Redo,
    Clear,
}

/// Session state: history, cursor and tools, plus a pending redraw request.
///
/// Every mutating operation ends by requesting a redraw; the host polls
/// [`Sketchpad::take_redraw_request`] and repaints the whole canvas.
#[derive(Debug, Clone)]
pub struct Sketchpad {
    history: CommandHistory,
    cursor: CursorState,
    tools: ToolRegistry,
    renderer: Renderer,
    canvas_width: u32,
    canvas_height: u32,
    redraw_requested: bool,
}

impl Sketchpad {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            history: CommandHistory::new(),
            cursor: CursorState::new(),
            tools: ToolRegistry::from_config(config),
            renderer: Renderer::from_config(config),
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            redraw_requested: true,
        }
    }

    pub fn handle(&mut self, event: SketchEvent) {
        debug!("Handling {:?}", event);
        match event {
            SketchEvent::PointerEnter(pos) => self.pointer_enter(pos),
            SketchEvent::PointerLeave => self.pointer_leave(),
            SketchEvent::PointerDown(pos) => self.pointer_down(pos),
            SketchEvent::PointerMove(pos) => self.pointer_move(pos),
            SketchEvent::PointerUp(pos) => self.pointer_up(pos),
            SketchEvent::SelectTool(id) => {
                self.select_tool(id);
            }
            SketchEvent::CreateSticker(input) => {
                self.register_sticker(input.as_deref());
            }
            SketchEvent::Undo => self.undo(),
            SketchEvent::Redo => self.redo(),
            SketchEvent::Clear => self.clear(),
        }
    }

    pub fn pointer_enter(&mut self, pos: Pos2) {
        self.cursor.enter(pos);
        self.request_redraw();
    }

    pub fn pointer_leave(&mut self) {
        self.cursor.leave();
        self.request_redraw();
    }

    /// Start a new drawable with the current tool. It is committed right away.
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.cursor.press(pos);
        let drawable = Drawable::create(pos, self.tools.current_kind());
        self.history.commit(drawable);
        self.request_redraw();
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.cursor.move_to(pos);
        if self.cursor.pointer_down() && self.cursor.is_drawing() {
            if let Some(drawable) = self.history.active_mut() {
                drawable.extend(pos);
            }
        }
        if self.cursor.wants_redraw() {
            self.request_redraw();
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        self.cursor.move_to(pos);
        self.cursor.release();
        self.request_redraw();
    }

    pub fn select_tool(&mut self, id: ToolId) -> bool {
        let selected = self.tools.select(id);
        if selected {
            // the hover preview depends on the tool
            self.request_redraw();
        }
        selected
    }

    pub fn register_sticker(&mut self, input: Option<&str>) -> Option<ToolId> {
        self.tools.register_sticker(input)
    }

    pub fn undo(&mut self) {
        self.cursor.detach();
        if self.history.undo() {
            self.request_redraw();
        }
    }

    pub fn redo(&mut self) {
        self.cursor.detach();
        if self.history.redo() {
            self.request_redraw();
        }
    }

    /// Drop both stacks and wipe the canvas, even if it was already empty
    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.cursor.detach();
        self.history.clear();
        self.request_redraw();
    }

    /// Back to a fresh session with the same tools
    pub fn reset(&mut self) {
        self.history = CommandHistory::new();
        self.cursor = CursorState::new();
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call, and resets the request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Full redraw of the live canvas
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer
            .redraw(surface, &self.history, &self.cursor, self.tools.current_kind());
    }

    /// Export the committed drawables. Leaves history and canvas untouched.
    pub fn export(&self, exporter: &Exporter) -> ExportResult<ExportedImage> {
        exporter.export(self.history.committed(), self.canvas_width, self.canvas_height)
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}
