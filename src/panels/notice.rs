use eframe::egui;

use crate::SketchpadApp;

/// A dismissible message shown on top of the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(title: &str, message: String) -> Self {
        Self {
            title: title.to_owned(),
            message,
            is_error: false,
        }
    }

    pub fn error(title: &str, message: String) -> Self {
        Self {
            title: title.to_owned(),
            message,
            is_error: true,
        }
    }
}

pub fn notice_window(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(notice) = app.notice().cloned() else {
        return;
    };

    let mut open = true;
    let mut dismissed = false;
    egui::Window::new(notice.title.as_str())
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            let text = egui::RichText::new(notice.message.as_str());
            if notice.is_error {
                ui.label(text.color(ui.visuals().error_fg_color));
            } else {
                ui.label(text);
            }
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if !open || dismissed {
        app.dismiss_notice();
    }
}
