use eframe::egui;

use crate::config::SketchConfig;
use crate::error::ExportResult;
use crate::export::{ExportedImage, Exporter};
use crate::input::InputHandler;
use crate::panels::{self, Notice};
use crate::sketchpad::Sketchpad;

/// eframe host around a [`Sketchpad`]: toolbar, canvas, sticker prompt and notices
pub struct SketchpadApp {
    config: SketchConfig,
    sketchpad: Sketchpad,
    exporter: Exporter,
    input: InputHandler,
    /// Text of the open sticker prompt, if any
    sticker_prompt: Option<String>,
    notice: Option<Notice>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            sketchpad: Sketchpad::new(&config),
            exporter: Exporter::from_config(&config),
            input: InputHandler::new(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                config.canvas_size(),
            )),
            sticker_prompt: None,
            notice: None,
            config,
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        self.config.canvas_size()
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt.get_or_insert_with(String::new);
    }

    pub fn close_sticker_prompt(&mut self) {
        self.sticker_prompt = None;
    }

    pub fn is_prompt_open(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    pub fn sticker_prompt_mut(&mut self) -> Option<&mut String> {
        self.sticker_prompt.as_mut()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Export the drawing and report the outcome in a notice. Failures are not fatal.
    pub fn export(&mut self) {
        let result = self
            .sketchpad
            .export(&self.exporter)
            .and_then(|image| self.deliver(&image));
        self.notice = Some(match result {
            Ok(message) => Notice::info("Export", message),
            Err(err) => {
                log::warn!("Export failed: {}", err);
                Notice::error("Export failed", err.to_string())
            }
        });
    }

    /// Lay out one frame of the whole UI
    pub fn show(&mut self, ctx: &egui::Context) {
        panels::toolbar_panel(self, ctx);
        panels::canvas_panel(self, ctx);
        panels::sticker_prompt(self, ctx);
        panels::notice_window(self, ctx);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver(&self, image: &ExportedImage) -> ExportResult<String> {
        let path = image.save_to(&self.config.export.output_dir)?;
        Ok(format!("Saved {}x{} image to {}", image.width, image.height, path.display()))
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver(&self, image: &ExportedImage) -> ExportResult<String> {
        image.download()?;
        Ok(format!("Downloaded {}", image.file_name))
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
