use crate::drawable::Drawable;

/// The canvas's ordered drawable list plus the redo stack behind it.
///
/// Undo and redo only move drawables between the two stacks; nothing is ever
/// re-created, so an undo/redo pair restores exactly what was there before.
#[derive(Debug, Clone, Default)]
pub struct DrawHistory {
    active: Vec<Drawable>,
    removed: Vec<Drawable>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable. A new action invalidates everything that could be redone.
    pub fn commit(&mut self, drawable: Drawable) {
        self.active.push(drawable);
        self.removed.clear();
    }

    /// Move the latest drawable to the redo stack. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.active.pop() {
            Some(drawable) => {
                self.removed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Inverse of [`DrawHistory::undo`]
    pub fn redo(&mut self) -> bool {
        match self.removed.pop() {
            Some(drawable) => {
                self.active.push(drawable);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn active(&self) -> &[Drawable] {
        &self.active
    }

    /// Mutable access for the render loop, which may prune stale temporaries
    pub fn active_mut(&mut self) -> &mut Vec<Drawable> {
        &mut self.active
    }

    pub fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.active.last_mut()
    }

    pub fn undo_len(&self) -> usize {
        self.active.len()
    }

    pub fn redo_len(&self) -> usize {
        self.removed.len()
    }

    /// Replace the whole history with `drawables`, dropping anything redoable
    pub fn replace(&mut self, drawables: Vec<Drawable>) {
        self.active = drawables;
        self.removed.clear();
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.removed.clear();
    }
}
