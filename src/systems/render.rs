//! Basic vector renderer.
//!
//! Draws every entity with a [`VectorSprite`](crate::components::sprite::VectorSprite)
//! and a position as an outlined shape. World coordinates are projected with
//! the camera origin at the center of the surface:
//!
//! ```text
//! screen = (world - camera) + (surface_width / 2, surface_height / 2)
//! ```
//!
//! Circles are stroked around their center. Squares are stroked as a
//! `width x width` rectangle centered on the position.

use rustc_hash::FxHashSet;

use crate::components::position::POSITION;
use crate::components::sprite::{SHAPE, Shape};
use crate::ecs::component::ComponentKind;
use crate::ecs::entity::{Entity, EntityId};
use crate::ecs::system::System;
use crate::error::{EngineError, Result};
use crate::resources::sharedpoint::SharedPoint;
use crate::resources::surface::RenderSurface;
use crate::vector2::Vector2;

pub const BASIC_RENDERER_SYSTEM: &str = "BasicRenderer";

/// Project a world point to surface pixels.
pub fn world_to_screen(world: Vector2, camera: Vector2, surface: &dyn RenderSurface) -> Vector2 {
    world - camera + half_extent(surface)
}

/// Inverse of [`world_to_screen`].
pub fn screen_to_world(screen: Vector2, camera: Vector2, surface: &dyn RenderSurface) -> Vector2 {
    screen - half_extent(surface) + camera
}

fn half_extent(surface: &dyn RenderSurface) -> Vector2 {
    Vector2::new(surface.width() / 2.0, surface.height() / 2.0)
}

/// Entities already reported for a missing or invalid shape.
#[derive(Debug, Default)]
pub struct ShapeWarnings {
    warned: FxHashSet<EntityId>,
}

impl ShapeWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `error` for `id` unless it was logged before. Returns whether it
    /// logged.
    pub fn warn(&mut self, id: EntityId, error: &EngineError) -> bool {
        if !self.warned.insert(id) {
            return false;
        }
        log::warn!("entity {id} has no drawable shape: {error}");
        true
    }

    pub fn len(&self) -> usize {
        self.warned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warned.is_empty()
    }
}

/// Draw one entity.
///
/// An entity without a usable `shape` attribute is skipped and reported once
/// through `warnings`; it does not abort the frame.
pub fn draw_entity(
    entity: &Entity,
    camera: Vector2,
    surface: &mut dyn RenderSurface,
    warnings: &mut ShapeWarnings,
) -> Result<()> {
    let position = entity.attributes().require_vector(POSITION)?;
    let shape = match entity.attributes().require_shape(SHAPE) {
        Ok(shape) => shape,
        Err(e) => {
            warnings.warn(entity.id(), &e);
            return Ok(());
        }
    };

    let screen = world_to_screen(position, camera, &*surface);
    match &shape {
        Shape::Circle { radius, color } => {
            surface.stroke_circle(screen.x, screen.y, *radius, color);
        }
        Shape::Square { width, color } => {
            let half = width / 2.0;
            surface.stroke_rect(screen.x - half, screen.y - half, *width, *width, color);
        }
    }
    Ok(())
}

/// Renderer reading its view origin from `camera`.
pub fn basic_renderer_system(camera: SharedPoint) -> System {
    let mut warnings = ShapeWarnings::new();
    System::new(
        BASIC_RENDERER_SYSTEM,
        [ComponentKind::VectorSprite, ComponentKind::Position],
    )
    .with_logic(
        move |entity: &mut Entity, _dt: f64, surface: &mut dyn RenderSurface| {
            draw_entity(entity, camera.get(), surface, &mut warnings)
        },
    )
}
