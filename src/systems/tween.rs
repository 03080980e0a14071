//! Tweening system.
//!
//! Drives [`Tweenable`](crate::components::tween::Tweenable) entities one
//! frame at a time. While `tween_duration` is non-zero, each invocation sets
//! the position to `style(origin, target, frame / duration)` and bumps the
//! frame counter. On the invocation where the counter reaches the duration,
//! the position snaps exactly onto the target and the tween goes inert
//! (frame and duration both reset to 0).
//!
//! Progress is counted in frames; delta time is not used.

use crate::components::position::POSITION;
use crate::components::tween::{
    TWEEN_DURATION, TWEEN_FRAME, TWEEN_ORIGIN, TWEEN_STYLE, TWEEN_TARGET,
};
use crate::ecs::component::ComponentKind;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::error::Result;
use crate::resources::surface::RenderSurface;
use crate::vector2::ElasticParams;

pub const TWEENING_SYSTEM: &str = "Tweening";

/// Advance one entity's tween by one frame.
pub fn advance_tween(entity: &mut Entity, params: &ElasticParams) -> Result<()> {
    let attrs = entity.attributes_mut();
    let duration = attrs.require_frames(TWEEN_DURATION)?;
    if duration == 0 {
        return Ok(());
    }
    let mut frame = attrs.require_frames(TWEEN_FRAME)?;
    let target = attrs.require_vector(TWEEN_TARGET)?;

    if frame < duration {
        let origin = attrs.require_vector(TWEEN_ORIGIN)?;
        let style = attrs.require_style(TWEEN_STYLE)?;
        let t = frame as f64 / duration as f64;
        attrs.set(POSITION, style.apply(origin, target, t, params));
        frame += 1;
        attrs.set(TWEEN_FRAME, frame);
    }

    if frame >= duration {
        attrs.set(POSITION, target);
        attrs.set(TWEEN_FRAME, 0u32);
        attrs.set(TWEEN_DURATION, 0u32);
    }
    Ok(())
}

pub fn tweening_system(params: ElasticParams) -> System {
    System::new(
        TWEENING_SYSTEM,
        [ComponentKind::Tweenable, ComponentKind::Position],
    )
    .with_logic(
        move |entity: &mut Entity, _dt: f64, _surface: &mut dyn RenderSurface| {
            advance_tween(entity, &params)
        },
    )
}
