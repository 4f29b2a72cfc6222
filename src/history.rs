use log::{debug, info};

use crate::drawable::Drawable;

/// Manages committed drawables and the ones undone since the last edit
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Drawables currently on the canvas, oldest first
    committed: Vec<Drawable>,
    /// Drawables that can be redone, most recently undone last
    redo_stack: Vec<Drawable>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new drawable. Any pending redo is discarded.
    pub fn commit(&mut self, drawable: Drawable) {
        debug!("Committing {} ({} redo entries dropped)", drawable.kind_name(), self.redo_stack.len());
        self.committed.push(drawable);
        self.redo_stack.clear();
    }

    /// Move the newest drawable to the redo stack. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                info!("Undo {}", drawable.kind_name());
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                info!("Redo {}", drawable.kind_name());
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Drop everything on both stacks
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    /// The newest committed drawable, which is the one still being drawn while a drag is active
    pub fn active_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
