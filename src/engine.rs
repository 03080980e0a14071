//! Engine loop shell.
//!
//! The [`Engine`] owns the configuration, the frame clock, the shared input
//! snapshot and the active [`Scene`]. The host calls [`Engine::frame`] once
//! per display refresh with a monotonically increasing timestamp in
//! milliseconds:
//!
//! 1. derive the frame delta from the timestamp ([`update_world_time`]),
//! 2. clear the surface with the configured background,
//! 3. run the scene's systems,
//! 4. run the scene's render hook.
//!
//! A system fault aborts steps 3 and 4 for that frame only. It is logged and
//! the next frame runs normally.

use crate::ecs::entity::EntityAllocator;
use crate::ecs::scene::Scene;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputSnapshot, SharedInput};
use crate::resources::surface::RenderSurface;
use crate::resources::worldtime::WorldTime;
use crate::systems::time::update_world_time;
use crate::vector2::ElasticParams;

/// How a call to [`Engine::frame`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// No scene is active; only the surface was cleared.
    NoScene,
    /// Every system ran and the scene rendered.
    Completed,
    /// A system failed; the rest of the frame was skipped.
    Aborted,
}

pub struct Engine {
    config: GameConfig,
    allocator: EntityAllocator,
    scene: Option<Scene>,
    time: WorldTime,
    input: SharedInput,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        let time = WorldTime::with_time_scale(config.time_scale);
        Self {
            config,
            allocator: EntityAllocator::new(),
            scene: None,
            time,
            input: InputSnapshot::shared(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn elastic_params(&self) -> ElasticParams {
        self.config.elastic_params()
    }

    pub fn time(&self) -> &WorldTime {
        &self.time
    }

    /// Handle to the input snapshot the host writes events into.
    pub fn input(&self) -> SharedInput {
        self.input.clone()
    }

    /// A new empty scene whose ids come from this engine's allocator.
    pub fn new_scene(&self, name: impl Into<String>) -> Scene {
        Scene::with_allocator(name, self.allocator)
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Make `scene` the active scene.
    ///
    /// The outgoing scene's `exit` result is handed to the incoming scene's
    /// `enter`. Returns the outgoing scene.
    pub fn change_scene(&mut self, mut scene: Scene) -> Option<Scene> {
        let mut previous = self.scene.take();
        let info = previous.as_mut().and_then(Scene::exit);
        scene.enter(info.as_deref());
        self.scene = Some(scene);
        previous
    }

    /// Run one frame at host time `timestamp_ms`.
    pub fn frame(&mut self, timestamp_ms: f64, surface: &mut dyn RenderSurface) -> FrameStatus {
        let delta_ms = update_world_time(&mut self.time, timestamp_ms);
        surface.clear(&self.config.background);

        let status = match self.scene.as_mut() {
            None => FrameStatus::NoScene,
            Some(scene) => match scene.update(delta_ms, surface) {
                Ok(()) => {
                    scene.render(surface, self.config.show_fps);
                    FrameStatus::Completed
                }
                Err(e) => {
                    log::error!(
                        "frame {} aborted in scene {:?}: {e}",
                        self.time.frame_count,
                        scene.name()
                    );
                    FrameStatus::Aborted
                }
            },
        };

        self.input.borrow_mut().end_frame();
        status
    }
}
