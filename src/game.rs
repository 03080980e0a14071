//! Demo scene.
//!
//! Builds the scene the binary runs:
//!
//! - a swarm of circles chasing the pointer,
//! - a square that tweens to a random spot whenever it comes to rest, cycling
//!   through the interpolation styles,
//! - a camera entity parked at the world origin.
//!
//! Systems are registered in the order they must run each frame: movement
//! first, then the camera, then the renderer.

use crate::components::camera::Camera;
use crate::components::followtarget::FollowTarget;
use crate::components::position::Position;
use crate::components::sprite::{Shape, VectorSprite};
use crate::components::tween::{Interpolation, Tweenable};
use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::Entity;
use crate::ecs::scene::Scene;
use crate::ecs::system::System;
use crate::engine::Engine;
use crate::error::Result;
use crate::resources::sharedpoint::SharedPoint;
use crate::resources::surface::RenderSurface;
use crate::systems::camera::camera_system;
use crate::systems::followtarget::follow_target_system;
use crate::systems::render::basic_renderer_system;
use crate::systems::tween::tweening_system;
use crate::vector2::Vector2;

pub const DEMO_SCENE: &str = "demo";
pub const RETARGET_SYSTEM: &str = "Retarget";

const FOLLOWER_COLORS: [&str; 5] = ["red", "orange", "green", "blue", "purple"];
const FOLLOWER_MIN_RADIUS: f64 = 4.0;
const FOLLOWER_MAX_RADIUS: f64 = 16.0;
const TWEEN_SQUARE_WIDTH: f64 = 40.0;
const TWEEN_FRAMES: u32 = 90;

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub followers: usize,
    pub seed: u64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            followers: 12,
            seed: 0x5EED,
        }
    }
}

/// Retarget idle tweens to a random point inside `half_extent` of the origin.
///
/// Each new tween uses the next style in [`Interpolation::ALL`].
pub fn retarget_system(half_extent: Vector2, duration: u32, seed: u64) -> System {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut next_style = 0usize;
    System::new(
        RETARGET_SYSTEM,
        [ComponentKind::Tweenable, ComponentKind::Position],
    )
    .with_logic(
        move |entity: &mut Entity, _dt: f64, _surface: &mut dyn RenderSurface| {
            if entity.is_tweening() {
                return Ok(());
            }
            let target = Vector2::new(
                (rng.f64() * 2.0 - 1.0) * half_extent.x,
                (rng.f64() * 2.0 - 1.0) * half_extent.y,
            );
            let style = Interpolation::ALL[next_style % Interpolation::ALL.len()];
            next_style += 1;
            log::debug!("entity {} tweening to {target} ({style})", entity.id());
            entity.start_tween(target, duration, style)
        },
    )
}

/// The demo scene plus the camera view its renderer reads.
pub struct DemoScene {
    pub scene: Scene,
    /// Camera origin, for mapping screen input back to world space.
    pub view: SharedPoint,
}

/// Build the demo scene for `engine`. The scene is not activated.
pub fn build_demo_scene(engine: &Engine, options: &DemoOptions) -> Result<DemoScene> {
    let config = engine.config();
    let half_extent = Vector2::new(
        config.render_width as f64 / 2.0,
        config.render_height as f64 / 2.0,
    );
    let mut rng = fastrand::Rng::with_seed(options.seed);
    let mut scene = engine.new_scene(DEMO_SCENE);

    let input = engine.input();
    for i in 0..options.followers {
        let radius = FOLLOWER_MIN_RADIUS + rng.f64() * (FOLLOWER_MAX_RADIUS - FOLLOWER_MIN_RADIUS);
        let start = Vector2::new(
            (rng.f64() * 2.0 - 1.0) * half_extent.x,
            (rng.f64() * 2.0 - 1.0) * half_extent.y,
        );
        let color = FOLLOWER_COLORS[i % FOLLOWER_COLORS.len()];
        let follow = FollowTarget::pointer(&input.borrow())
            .with_max_speed(2.0 + rng.f64() * 4.0)
            .with_distance(radius * 2.0);
        let components: [Component; 3] = [
            Position(start).into(),
            follow.into(),
            VectorSprite::new(Shape::circle(radius, color)?).into(),
        ];
        scene.spawn_with(components)?;
    }

    let square: [Component; 3] = [
        Position::new(0.0, 0.0).into(),
        Tweenable::new(Interpolation::Lerp).into(),
        VectorSprite::new(Shape::square(TWEEN_SQUARE_WIDTH, "black")?).into(),
    ];
    scene.spawn_with(square)?;

    let view = SharedPoint::default();
    let camera: [Component; 2] = [
        Position::new(0.0, 0.0).into(),
        Camera::new(view.clone()).into(),
    ];
    scene.spawn_with(camera)?;

    let margin = Vector2::new(TWEEN_SQUARE_WIDTH, TWEEN_SQUARE_WIDTH);
    scene
        .add_system(follow_target_system())
        .add_system(tweening_system(engine.elastic_params()))
        .add_system(retarget_system(
            half_extent - margin,
            TWEEN_FRAMES,
            options.seed.wrapping_add(1),
        ))
        .add_system(camera_system())
        .add_system(basic_renderer_system(view.clone()));

    log::info!(
        "Built {DEMO_SCENE} scene: {} entities, systems {:?}",
        scene.entity_count(),
        scene.system_names()
    );
    Ok(DemoScene { scene, view })
}
