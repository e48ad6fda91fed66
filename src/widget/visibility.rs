//! Open/closed state of the picker panel.

use crate::utils::bounds::Bounds;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityToggle {
    is_open: bool,
}

impl VisibilityToggle {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip the state; returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// A pointer press at `point`. Closes an open panel when the press lands
    /// outside `bounds`; returns true if it did.
    ///
    /// Without bounds there is no way to tell inside from outside, so the
    /// press is ignored.
    pub fn pointer_down(&mut self, point: (f32, f32), bounds: Option<Bounds>) -> bool {
        if !self.is_open {
            return false;
        }
        match bounds {
            Some(bounds) if !bounds.contains(point) => {
                self.is_open = false;
                true
            }
            _ => false,
        }
    }
}
