//! Scenes: entity ownership, system order and lifecycle hooks.
//!
//! A [`Scene`] owns its entities (keyed by [`EntityId`], iterated in id order)
//! and an ordered list of [`System`]s. [`Scene::update`] runs every system
//! once, in registration order. If a system fails, the remaining systems of
//! that frame are skipped and the error is returned to the caller.
//!
//! Lifecycle hooks live behind [`SceneHooks`]. The defaults log scene entry
//! and exit, hand a farewell message from the outgoing scene to the incoming
//! one, and draw an FPS counter.

use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::component::{Attributes, Component, ComponentKind};
use super::entity::{Entity, EntityAllocator, EntityId};
use super::system::System;
use crate::error::{EngineError, Result};
use crate::resources::surface::RenderSurface;

/// Message the default [`SceneHooks::exit`] hands to the next scene.
pub const DEFAULT_FAREWELL: &str = "Bye bye!";
/// Color of the default FPS overlay.
pub const FPS_TEXT_COLOR: &str = "black";

/// What a scene's render hook gets to know about the frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    pub scene_name: &'a str,
    pub last_delta_ms: f64,
    pub show_fps: bool,
}

/// Draw `FPS: n` in the top-left corner.
pub fn draw_fps(surface: &mut dyn RenderSurface, last_delta_ms: f64) {
    if last_delta_ms <= 0.0 {
        return;
    }
    let fps = (1000.0 / last_delta_ms).round();
    surface.draw_text(&format!("FPS: {fps}"), 0.0, 0.0, FPS_TEXT_COLOR);
}

/// Customizable scene lifecycle.
pub trait SceneHooks {
    /// Called when the scene becomes active. `info` is whatever the previous
    /// scene's [`exit`](SceneHooks::exit) returned.
    fn enter(&mut self, scene_name: &str, info: Option<&str>) {
        log::info!("Entering {scene_name}");
        if let Some(info) = info {
            log::info!("{scene_name} was told: {info}");
        }
    }

    /// Called after the frame's systems ran.
    fn render(&mut self, frame: &FrameInfo<'_>, surface: &mut dyn RenderSurface) {
        if frame.show_fps {
            draw_fps(surface, frame.last_delta_ms);
        }
    }

    /// Called when the scene is replaced. The return value is passed to the
    /// next scene's [`enter`](SceneHooks::enter).
    fn exit(&mut self, scene_name: &str) -> Option<String> {
        log::info!("Exiting {scene_name}");
        Some(DEFAULT_FAREWELL.to_string())
    }
}

/// Hooks with all default behavior.
#[derive(Debug, Default)]
pub struct DefaultHooks;

impl SceneHooks for DefaultHooks {}

pub struct Scene {
    name: String,
    allocator: EntityAllocator,
    entities: BTreeMap<EntityId, Entity>,
    systems: Vec<System>,
    hooks: Box<dyn SceneHooks>,
    last_delta_ms: f64,
}

impl Scene {
    /// A scene with its own id allocator.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_allocator(name, EntityAllocator::new())
    }

    /// A scene minting ids from a shared allocator.
    pub fn with_allocator(name: impl Into<String>, allocator: EntityAllocator) -> Self {
        Self {
            name: name.into(),
            allocator,
            entities: BTreeMap::new(),
            systems: Vec::new(),
            hooks: Box::new(DefaultHooks),
            last_delta_ms: 0.0,
        }
    }

    pub fn with_hooks(mut self, hooks: impl SceneHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allocator(&self) -> &EntityAllocator {
        &self.allocator
    }

    /// Delta of the last [`update`](Self::update), in milliseconds.
    pub fn last_delta_ms(&self) -> f64 {
        self.last_delta_ms
    }

    // ---------------- entities ----------------

    /// Create an empty entity in this scene.
    pub fn spawn(&mut self) -> &mut Entity {
        let entity = Entity::new(&self.allocator);
        match self.entities.entry(entity.id()) {
            Entry::Vacant(slot) => slot.insert(entity),
            Entry::Occupied(mut slot) => {
                slot.insert(entity);
                slot.into_mut()
            }
        }
    }

    /// Create an entity with the given components.
    ///
    /// Nothing is added if any template is invalid.
    pub fn spawn_with<C: Into<Component>>(
        &mut self,
        components: impl IntoIterator<Item = C>,
    ) -> Result<EntityId> {
        let mut entity = Entity::new(&self.allocator);
        for component in components {
            entity.attach(component)?;
        }
        self.add_entity(entity)
    }

    /// Take ownership of an entity built elsewhere.
    ///
    /// An entity whose id is already in the scene is refused and the scene
    /// keeps the one it has.
    pub fn add_entity(&mut self, entity: Entity) -> Result<EntityId> {
        match self.entities.entry(entity.id()) {
            Entry::Vacant(slot) => {
                let id = entity.id();
                slot.insert(entity);
                Ok(id)
            }
            Entry::Occupied(slot) => Err(EngineError::DuplicateEntity(slot.key().raw())),
        }
    }

    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Entities in id order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Attach to an entity by id. `Ok(false)` if the entity does not exist.
    pub fn attach_component(&mut self, id: EntityId, component: impl Into<Component>) -> Result<bool> {
        match self.entities.get_mut(&id) {
            Some(entity) => {
                entity.attach(component)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Detach from an entity by id. `false` if the entity or the kind is absent.
    pub fn detach_component(&mut self, id: EntityId, kind: ComponentKind) -> bool {
        self.entities
            .get_mut(&id)
            .is_some_and(|entity| entity.detach(kind))
    }

    pub fn has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.entities.get(&id).is_some_and(|entity| entity.has(kind))
    }

    // ---------------- systems ----------------

    /// Append a system. Systems run in the order they were added.
    pub fn add_system(&mut self, system: System) -> &mut Self {
        log::debug!("scene {:?}: registered system {:?}", self.name, system.name());
        self.systems.push(system);
        self
    }

    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    // ---------------- frame ----------------

    /// Run every system once.
    ///
    /// Stops at the first failing system; its error is returned and later
    /// systems do not run this frame. Changes made before the failure stay.
    pub fn update(&mut self, delta_ms: f64, surface: &mut dyn RenderSurface) -> Result<()> {
        self.last_delta_ms = delta_ms;
        for system in self.systems.iter_mut() {
            let invoked = system.run(self.entities.values_mut(), delta_ms, surface)?;
            log::trace!("system {:?} processed {invoked} entities", system.name());
        }
        Ok(())
    }

    pub fn enter(&mut self, info: Option<&str>) {
        self.hooks.enter(&self.name, info);
    }

    pub fn exit(&mut self) -> Option<String> {
        self.hooks.exit(&self.name)
    }

    pub fn render(&mut self, surface: &mut dyn RenderSurface, show_fps: bool) {
        let frame = FrameInfo {
            scene_name: &self.name,
            last_delta_ms: self.last_delta_ms,
            show_fps,
        };
        self.hooks.render(&frame, surface);
    }

    /// Serializable view of the scene's entities.
    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot {
            name: &self.name,
            systems: self.system_names(),
            entities: self
                .entities
                .values()
                .map(|e| EntitySnapshot {
                    id: e.id(),
                    kinds: e.kinds(),
                    attributes: e.attributes(),
                })
                .collect(),
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("entities", &self.entities.len())
            .field("systems", &self.systems)
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct EntitySnapshot<'a> {
    pub id: EntityId,
    pub kinds: Vec<ComponentKind>,
    pub attributes: &'a Attributes,
}

#[derive(Debug, Serialize)]
pub struct SceneSnapshot<'a> {
    pub name: &'a str,
    pub systems: Vec<&'a str>,
    pub entities: Vec<EntitySnapshot<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::camera::Camera;
    use crate::components::position::Position;
    use crate::error::EngineError;
    use crate::resources::sharedpoint::SharedPoint;
    use crate::resources::surface::{DrawCommand, RecordingSurface};
    use crate::vector2::Vector2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn noop_surface() -> RecordingSurface {
        RecordingSurface::new(100, 100)
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let mut scene = Scene::new("s");
        let a = scene.spawn().id();
        let b = scene.spawn().id();
        assert!(a < b);
        assert_eq!(scene.entity_count(), 2);
    }

    #[test]
    fn test_spawn_with_is_all_or_nothing() {
        let mut scene = Scene::new("s");
        let bad = Component::new(ComponentKind::Camera);
        let res = scene.spawn_with([Position::new(0.0, 0.0).into(), bad]);
        assert!(res.is_err());
        assert_eq!(scene.entity_count(), 0);
    }

    #[test]
    fn test_separate_scenes_never_share_ids() {
        let mut a = Scene::new("a");
        let mut b = Scene::new("b");
        let first = a.spawn().id();
        let second = b.spawn().id();
        assert_ne!(first, second);
        assert!(b.entity(first).is_none());
    }

    #[test]
    fn test_spawn_returns_a_fresh_entity() {
        let mut scene = Scene::new("s");
        let a = scene.spawn().id();
        scene.attach_component(a, Position::new(1.0, 1.0)).unwrap();
        let fresh = scene.spawn();
        assert_ne!(fresh.id(), a);
        assert!(fresh.kinds().is_empty());
    }

    #[test]
    fn test_add_entity_refuses_duplicate_id() {
        let mut scene = Scene::new("s");
        let mut original = Entity::new(scene.allocator());
        original.attach(Position::new(1.0, 2.0)).unwrap();
        let mut copy = original.clone();
        copy.set_position(Vector2::new(9.0, 9.0));

        let id = scene.add_entity(original).unwrap();
        let err = scene.add_entity(copy).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateEntity(raw) if raw == id.raw()));
        assert_eq!(scene.entity_count(), 1);
        assert_eq!(
            scene.entity(id).and_then(Entity::position),
            Some(Vector2::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_absent_entities_give_empty_results() {
        let mut scene = Scene::new("s");
        let id = scene.spawn().id();
        let gone = scene.remove_entity(id).unwrap().id();
        assert_eq!(gone, id);
        assert!(scene.entity(id).is_none());
        assert!(scene.remove_entity(id).is_none());
        assert!(!scene.attach_component(id, Position::new(1.0, 1.0)).unwrap());
        assert!(!scene.detach_component(id, ComponentKind::Position));
        assert!(!scene.has_component(id, ComponentKind::Position));
    }

    #[test]
    fn test_attach_and_detach_by_id() {
        let mut scene = Scene::new("s");
        let id = scene.spawn().id();
        assert!(scene.attach_component(id, Position::new(1.0, 1.0)).unwrap());
        assert!(scene.has_component(id, ComponentKind::Position));
        assert!(scene.detach_component(id, ComponentKind::Position));
        assert!(!scene.has_component(id, ComponentKind::Position));
    }

    #[test]
    fn test_systems_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new("s");
        scene.spawn_with([Position::new(0.0, 0.0)]).unwrap();
        for name in ["first", "second", "third"] {
            let log = log.clone();
            scene.add_system(System::new(name, [ComponentKind::Position]).with_logic(
                move |_e: &mut Entity, _dt: f64, _s: &mut dyn RenderSurface| {
                    log.borrow_mut().push(name);
                    Ok(())
                },
            ));
        }
        scene.update(16.0, &mut noop_surface()).unwrap();
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failing_system_aborts_rest_of_frame() {
        let ran_after = Rc::new(RefCell::new(0));
        let mut scene = Scene::new("s");
        let id = scene.spawn_with([Position::new(0.0, 0.0)]).unwrap();

        scene.add_system(System::new("mover", [ComponentKind::Position]).with_logic(
            |e: &mut Entity, _dt: f64, _s: &mut dyn RenderSurface| {
                e.set_position(Vector2::new(7.0, 7.0));
                Ok(())
            },
        ));
        scene.add_system(System::new("broken", [ComponentKind::Position]).with_logic(
            |_e: &mut Entity, _dt: f64, _s: &mut dyn RenderSurface| {
                Err(EngineError::MissingAttribute("nope".into()))
            },
        ));
        let counter = ran_after.clone();
        scene.add_system(System::new("after", [ComponentKind::Position]).with_logic(
            move |_e: &mut Entity, _dt: f64, _s: &mut dyn RenderSurface| {
                *counter.borrow_mut() += 1;
                Ok(())
            },
        ));

        let err = scene.update(16.0, &mut noop_surface()).unwrap_err();
        assert!(matches!(err, EngineError::SystemFault { ref system, .. } if system == "broken"));
        assert_eq!(*ran_after.borrow(), 0);
        // no rollback
        assert_eq!(
            scene.entity(id).unwrap().position(),
            Some(Vector2::new(7.0, 7.0))
        );
    }

    #[test]
    fn test_default_hooks() {
        let mut scene = Scene::new("menu");
        scene.enter(Some("hello"));
        assert_eq!(scene.exit().as_deref(), Some(DEFAULT_FAREWELL));
    }

    #[test]
    fn test_render_draws_fps_from_last_delta() {
        let mut scene = Scene::new("s");
        let mut surface = noop_surface();
        scene.update(20.0, &mut surface).unwrap();
        scene.render(&mut surface, true);
        assert_eq!(
            surface.commands().last(),
            Some(&DrawCommand::Text {
                text: "FPS: 50".into(),
                x: 0.0,
                y: 0.0,
                color: FPS_TEXT_COLOR.into()
            })
        );

        let mut quiet = noop_surface();
        scene.render(&mut quiet, false);
        assert!(quiet.commands().is_empty());
    }

    #[test]
    fn test_custom_hooks() {
        struct Loud(Rc<RefCell<Vec<String>>>);
        impl SceneHooks for Loud {
            fn enter(&mut self, name: &str, info: Option<&str>) {
                self.0.borrow_mut().push(format!("{name}:{info:?}"));
            }
            fn exit(&mut self, _name: &str) -> Option<String> {
                None
            }
        }
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new("custom").with_hooks(Loud(log.clone()));
        scene.enter(None);
        assert_eq!(scene.exit(), None);
        assert_eq!(*log.borrow(), vec!["custom:None".to_string()]);
    }

    #[test]
    fn test_snapshot_lists_entities_in_id_order() {
        let mut scene = Scene::new("snap");
        let a = scene.spawn_with([Position::new(1.0, 2.0)]).unwrap();
        let b = scene
            .spawn_with([
                Component::from(Position::new(0.0, 0.0)),
                Camera::new(SharedPoint::default()).into(),
            ])
            .unwrap();
        let snap = scene.snapshot();
        assert_eq!(snap.entities.len(), 2);
        assert_eq!(snap.entities[0].id, a);
        assert_eq!(snap.entities[1].id, b);
        assert_eq!(
            snap.entities[1].kinds,
            vec![ComponentKind::Camera, ComponentKind::Position]
        );
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["name"], "snap");
        assert_eq!(json["entities"][0]["attributes"]["position"]["Vector"]["x"], 1.0);
    }
}
