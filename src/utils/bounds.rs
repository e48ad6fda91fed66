//! Bounding rectangles for outside-click detection.
//!
//! Hosts report where the picker panel sits on screen; a pointer press
//! outside that rectangle closes an open panel.

/// An axis-aligned rectangle in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside or on the edge.
    pub fn contains(&self, point: (f32, f32)) -> bool {
        let (px, py) = point;
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        Bounds::new(left, top, right - left, bottom - top)
    }
}
