#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod cursor;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod sketchpad;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use config::SketchConfig;
pub use cursor::CursorState;
pub use drawable::Drawable;
pub use error::{ConfigError, ExportError};
pub use export::{ExportedImage, Exporter};
pub use history::CommandHistory;
pub use input::{InputHandler, PointerFrame};
pub use renderer::Renderer;
pub use sketchpad::{SketchEvent, Sketchpad};
pub use surface::{PainterSurface, RasterSurface, RecordingSurface, Surface, SurfaceOp, SurfaceStyle};
pub use tools::{ToolDef, ToolId, ToolKind, ToolRegistry};
