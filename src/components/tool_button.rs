use eframe::egui;

/// Square-ish toolbar button that stays highlighted while its tool is current
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(20.0);
        let text_color = if self.selected {
            egui::Color32::BLACK
        } else {
            egui::Color32::WHITE
        };
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_owned(), font_id, text_color);

        // glyph stickers stay square, text labels grow to fit
        let button_size = egui::vec2((galley.size().x + 12.0).max(32.0), 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(40) // Lighter gray on hover
            } else {
                egui::Color32::from_gray(30) // Dark gray by default
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter()
                .galley(rect.center() - galley.size() / 2.0, galley, text_color);

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
