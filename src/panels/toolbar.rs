use eframe::egui;

use crate::SketchpadApp;
use crate::components::tool_button::ToolButton;
use crate::sketchpad::SketchEvent;
use crate::tools::ToolKind;

pub fn toolbar_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.heading(app.title());

        let mut events = Vec::new();
        let mut open_prompt = false;
        let mut export = false;

        ui.horizontal_wrapped(|ui| {
            let tools = app.sketchpad().tools();
            for tool in tools.iter() {
                let hint = match &tool.kind {
                    ToolKind::Marker { thickness } => format!("{} marker ({}px)", tool.label, thickness),
                    ToolKind::Sticker { glyph } => format!("{} sticker", glyph),
                };
                let response = ToolButton::new(&tool.label, tools.is_current(tool.id))
                    .show(ui)
                    .on_hover_text(hint);
                if response.clicked() {
                    log::info!("Tool selected from UI: {}", tool.label);
                    events.push(SketchEvent::SelectTool(tool.id));
                }
            }
            if ToolButton::new("+", false)
                .show(ui)
                .on_hover_text("Create a custom sticker")
                .clicked()
            {
                open_prompt = true;
            }
        });

        ui.horizontal(|ui| {
            let history = app.sketchpad().history();
            if ui.add_enabled(history.can_undo(), egui::Button::new("Undo")).clicked() {
                events.push(SketchEvent::Undo);
            }
            if ui.add_enabled(history.can_redo(), egui::Button::new("Redo")).clicked() {
                events.push(SketchEvent::Redo);
            }
            if ui.button("Clear").clicked() {
                events.push(SketchEvent::Clear);
            }
            ui.separator();
            if ui.button("Export").clicked() {
                export = true;
            }
        });

        for event in events {
            app.sketchpad_mut().handle(event);
        }
        if open_prompt {
            app.open_sticker_prompt();
        }
        if export {
            app.export();
        }
    });
}
