use log::{debug, info, warn};

use super::{ToolDef, ToolId, ToolKind};
use crate::config::SketchConfig;

/// Ordered, append-only set of tools with exactly one current entry
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
    current: usize,
}

impl ToolRegistry {
    /// Registry holding `initial`, which starts out selected
    pub fn new(initial: ToolDef) -> Self {
        Self {
            tools: vec![initial],
            current: 0,
        }
    }

    /// Markers first, then stickers, in config order. The first marker is selected.
    pub fn from_config(config: &SketchConfig) -> Self {
        let mut tools = config
            .markers
            .iter()
            .map(|m| ToolDef::marker(&m.label, m.thickness))
            .chain(config.stickers.iter().map(|s| ToolDef::sticker(s)));

        let mut registry = match tools.next() {
            Some(first) => Self::new(first),
            None => {
                warn!("Config has no tools, falling back to a default marker");
                Self::new(ToolDef::marker("Marker", 1))
            }
        };
        for tool in tools {
            registry.tools.push(tool);
        }
        registry
    }

    pub fn register(&mut self, tool: ToolDef) -> ToolId {
        let id = tool.id;
        info!("Registered tool '{}' ({})", tool.label, id);
        self.tools.push(tool);
        id
    }

    /// Register a user-created sticker.
    ///
    /// `None` means the prompt was cancelled. Cancelled and blank input leave
    /// the registry untouched.
    pub fn register_sticker(&mut self, input: Option<&str>) -> Option<ToolId> {
        let glyph = input.map(str::trim).filter(|g| !g.is_empty());
        match glyph {
            Some(glyph) => Some(self.register(ToolDef::sticker(glyph))),
            None => {
                debug!("Ignoring empty sticker input");
                None
            }
        }
    }

    /// Make `id` the current tool. Unknown ids are ignored.
    pub fn select(&mut self, id: ToolId) -> bool {
        match self.tools.iter().position(|t| t.id == id) {
            Some(index) => {
                self.current = index;
                info!("Selected tool '{}'", self.tools[index].label);
                true
            }
            None => {
                warn!("Attempted to select unknown tool {}", id);
                false
            }
        }
    }

    pub fn current(&self) -> &ToolDef {
        &self.tools[self.current]
    }

    pub fn current_kind(&self) -> &ToolKind {
        &self.current().kind
    }

    pub fn is_current(&self, id: ToolId) -> bool {
        self.current().id == id
    }

    pub fn get(&self, id: ToolId) -> Option<&ToolDef> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDef> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn find_marker(&self, thickness: u32) -> Option<ToolId> {
        self.find(|kind| *kind == ToolKind::Marker { thickness })
    }

    pub fn find_sticker(&self, glyph: &str) -> Option<ToolId> {
        self.find(|kind| matches!(kind, ToolKind::Sticker { glyph: g } if g == glyph))
    }

    fn find(&self, predicate: impl Fn(&ToolKind) -> bool) -> Option<ToolId> {
        self.tools.iter().find(|t| predicate(&t.kind)).map(|t| t.id)
    }
}
