mod canvas;
mod notice;
mod sticker_prompt;
mod toolbar;

pub use canvas::canvas_panel;
pub use notice::{Notice, notice_window};
pub use sticker_prompt::sticker_prompt;
pub use toolbar::toolbar_panel;
