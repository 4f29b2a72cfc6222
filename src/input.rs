use egui::{Context, LayerId, PointerButton, Pos2, Rect};

use crate::sketchpad::SketchEvent;

/// The slice of egui pointer state the canvas cares about for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    /// Another layer (a window or popup) sits between the pointer and the canvas
    pub covered: bool,
}

impl PointerFrame {
    pub fn from_egui(ctx: &Context, canvas_layer: LayerId) -> Self {
        let mut frame = ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.button_pressed(PointerButton::Primary),
            primary_released: input.pointer.button_released(PointerButton::Primary),
            covered: false,
        });
        // panels live on the background layer, which has no area and reports None
        frame.covered = frame
            .hover_pos
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer != canvas_layer);
        frame
    }
}

/// Handles converting raw egui input into canvas-local [`SketchEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    hovering: bool,
    dragging: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            hovering: false,
            dragging: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Events for this frame, ignoring the pointer wherever something on top of `canvas_layer` hides it
    pub fn process_input(&mut self, ctx: &Context, canvas_layer: LayerId) -> Vec<SketchEvent> {
        self.translate(PointerFrame::from_egui(ctx, canvas_layer))
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    pub fn translate(&mut self, frame: PointerFrame) -> Vec<SketchEvent> {
        let mut events = Vec::new();
        let inside = !frame.covered
            && frame
                .hover_pos
                .is_some_and(|pos| self.canvas_rect.contains(pos));

        match (self.hovering, inside, frame.hover_pos) {
            (false, true, Some(pos)) => {
                events.push(SketchEvent::PointerEnter(self.to_local(pos)));
                self.hovering = true;
            }
            (true, false, _) => {
                events.push(SketchEvent::PointerLeave);
                self.hovering = false;
            }
            _ => {}
        }

        if let Some(pos) = frame.hover_pos {
            // drags keep reporting outside the canvas so strokes can run off the edge
            if Some(pos) != self.last_pointer_pos && (inside || self.dragging) {
                events.push(SketchEvent::PointerMove(self.to_local(pos)));
            }
            self.last_pointer_pos = Some(pos);
        }

        if frame.primary_pressed && inside {
            if let Some(pos) = frame.hover_pos {
                events.push(SketchEvent::PointerDown(self.to_local(pos)));
                self.dragging = true;
            }
        }

        if frame.primary_released && self.dragging {
            if let Some(pos) = frame.hover_pos.or(self.last_pointer_pos) {
                events.push(SketchEvent::PointerUp(self.to_local(pos)));
            }
            self.dragging = false;
        }

        events
    }
}
