//! Camera system.
//!
//! Copies the position of each camera entity into its shared `camera` point,
//! which the renderer reads as the view origin. Register it before the
//! renderer so a frame draws with that frame's camera position.

use crate::components::camera::CAMERA;
use crate::components::position::POSITION;
use crate::ecs::component::ComponentKind;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::error::Result;
use crate::resources::surface::RenderSurface;

pub const CAMERA_SYSTEM: &str = "Camera";

pub fn publish_camera(entity: &mut Entity) -> Result<()> {
    let attrs = entity.attributes();
    let position = attrs.require_vector(POSITION)?;
    attrs.require_point(CAMERA)?.set(position);
    Ok(())
}

pub fn camera_system() -> System {
    System::new(CAMERA_SYSTEM, [ComponentKind::Camera, ComponentKind::Position]).with_logic(
        |entity: &mut Entity, _dt: f64, _surface: &mut dyn RenderSurface| publish_camera(entity),
    )
}
