//! Shared moving point.
//!
//! A [`SharedPoint`] is a cheap, clonable handle to a single `Vector2` cell.
//! Cloning the handle does not copy the point: every clone observes and writes
//! the same location. This is how followers track the pointer (the input
//! snapshot owns the pointer point and hands out clones) and how the camera
//! system publishes the view origin to the renderer.
//!
//! The handle is `!Send`, which keeps it on the single frame thread.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::vector2::Vector2;

#[derive(Clone, Default)]
pub struct SharedPoint(Rc<Cell<Vector2>>);

impl SharedPoint {
    pub fn new(initial: Vector2) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    /// Current value of the point.
    pub fn get(&self) -> Vector2 {
        self.0.get()
    }

    /// Move the point. Visible to every clone of this handle.
    pub fn set(&self, value: Vector2) {
        self.0.set(value);
    }

    /// True if both handles refer to the same point.
    pub fn ptr_eq(&self, other: &SharedPoint) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedPoint").field(&self.get()).finish()
    }
}

/// Serialized as the point's current value.
impl Serialize for SharedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_point() {
        let a = SharedPoint::new(Vector2::new(1.0, 2.0));
        let b = a.clone();
        b.set(Vector2::new(5.0, 6.0));
        assert_eq!(a.get(), Vector2::new(5.0, 6.0));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_separate_points_are_independent() {
        let a = SharedPoint::new(Vector2::ZERO);
        let b = SharedPoint::new(Vector2::ZERO);
        a.set(Vector2::new(1.0, 1.0));
        assert_eq!(b.get(), Vector2::ZERO);
        assert!(!a.ptr_eq(&b));
    }
}
