use eframe::egui;

use crate::SketchpadApp;
use crate::surface::PainterSurface;

pub fn canvas_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(app.canvas_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        // the sticker prompt is modal
        if !app.is_prompt_open() {
            let events = {
                let input = app.input_mut();
                input.set_canvas_rect(canvas_rect);
                input.process_input(ctx, ui.layer_id())
            };
            for event in events {
                app.sketchpad_mut().handle(event);
            }
        }

        // the preview stands in for the OS cursor
        if app.input().is_hovering() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        let style = app.sketchpad().renderer().style_at(1.0);
        let mut surface = PainterSurface::new(&painter, canvas_rect, style);
        app.sketchpad().render(&mut surface);

        if app.sketchpad_mut().take_redraw_request() {
            ctx.request_repaint();
        }
    });
}
