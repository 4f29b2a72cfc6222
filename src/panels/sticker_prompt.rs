use eframe::egui;

use crate::SketchpadApp;
use crate::sketchpad::SketchEvent;

/// Modal text prompt for a new sticker glyph
pub fn sticker_prompt(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(text) = app.sticker_prompt_mut() else {
        return;
    };

    // Some(None) is a cancel, Some(Some(_)) a submit
    let mut outcome: Option<Option<String>> = None;
    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Type or paste a glyph for the new sticker:");
            let response = ui.text_edit_singleline(text);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() || submitted {
                    outcome = Some(Some(text.clone()));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(None);
                }
            });
        });

    if let Some(input) = outcome {
        app.close_sticker_prompt();
        app.sketchpad_mut().handle(SketchEvent::CreateSticker(input));
    }
}
