use std::fmt;

use uuid::Uuid;

mod registry;

pub use registry::ToolRegistry;

/// Stable identifier of a toolbar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolId(Uuid);

impl ToolId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToolId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a tool puts on the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolKind {
    /// Freehand stroke of the given width
    Marker { thickness: u32 },
    /// Stamp of the given glyph
    Sticker { glyph: String },
}

impl ToolKind {
    pub fn sticker(glyph: &str) -> Self {
        Self::Sticker {
            glyph: glyph.to_owned(),
        }
    }
}

/// A registered tool as shown in the toolbar
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDef {
    pub id: ToolId,
    pub label: String,
    pub kind: ToolKind,
}

impl ToolDef {
    pub fn new(label: &str, kind: ToolKind) -> Self {
        Self {
            id: ToolId::new(),
            label: label.to_owned(),
            kind,
        }
    }

    pub fn marker(label: &str, thickness: u32) -> Self {
        Self::new(label, ToolKind::Marker { thickness })
    }

    /// Stickers are labelled with their own glyph
    pub fn sticker(glyph: &str) -> Self {
        Self::new(glyph, ToolKind::sticker(glyph))
    }
}
