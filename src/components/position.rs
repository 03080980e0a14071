//! World-space position component.
//!
//! Every moving or drawable entity carries a `position` attribute. Followers,
//! tweens, the camera and the renderer all read or write it.

use crate::ecs::component::{Component, ComponentKind};
use crate::vector2::Vector2;

pub const POSITION: &str = "position";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub Vector2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position(Vector2::new(x, y))
    }
}

impl From<Position> for Component {
    fn from(p: Position) -> Self {
        Component::new(ComponentKind::Position).with(POSITION, p.0)
    }
}
