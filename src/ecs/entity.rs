//! Entities and id allocation.
//!
//! An [`Entity`] is an id, the set of component kinds attached to it, and its
//! own [`Attributes`]. Components are additive tags: attaching one copies its
//! template into the attribute store, detaching one only removes the tag and
//! leaves the copied attributes in place.

use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use super::component::{Attributes, Component, ComponentKind};
use crate::components::position::POSITION;
use crate::components::tween::{
    Interpolation, TWEEN_DURATION, TWEEN_FRAME, TWEEN_ORIGIN, TWEEN_STYLE, TWEEN_TARGET,
};
use crate::error::Result;
use crate::vector2::Vector2;

/// Unique, monotonically increasing entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(0);

/// Mints entity ids.
///
/// Every allocator draws from one process-wide counter, so ids never repeat
/// across scenes or engines, however they were created.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityAllocator;

impl EntityAllocator {
    pub fn new() -> Self {
        Self
    }

    pub fn allocate(&self) -> EntityId {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    kinds: FxHashSet<ComponentKind>,
    attributes: Attributes,
}

impl Entity {
    /// A fresh entity with no components.
    pub fn new(allocator: &EntityAllocator) -> Self {
        Self {
            id: allocator.allocate(),
            kinds: FxHashSet::default(),
            attributes: Attributes::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Attach a component template.
    ///
    /// The template is validated first; on error the entity is untouched.
    /// Re-attaching a kind copies its defaults again, discarding runtime
    /// changes to those keys.
    pub fn attach(&mut self, component: impl Into<Component>) -> Result<&mut Self> {
        let mut component = component.into();
        component.validate()?;
        self.attributes.merge(component.data());
        self.kinds.insert(component.kind());
        Ok(self)
    }

    /// Builder form of [`attach`](Self::attach).
    pub fn with(mut self, component: impl Into<Component>) -> Result<Self> {
        self.attach(component)?;
        Ok(self)
    }

    /// Remove the kind tag. Returns whether it was attached.
    ///
    /// Attributes copied by the component stay on the entity.
    pub fn detach(&mut self, kind: ComponentKind) -> bool {
        self.kinds.remove(&kind)
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Attached kinds in a stable order.
    pub fn kinds(&self) -> Vec<ComponentKind> {
        let mut kinds: Vec<_> = self.kinds.iter().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn position(&self) -> Option<Vector2> {
        self.attributes.vector(POSITION)
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.attributes.set(POSITION, position);
    }

    /// Start a new tween from the current position.
    ///
    /// The entity must already be tweenable; the tween restarts from frame 0
    /// even if one was running.
    pub fn start_tween(&mut self, target: Vector2, duration: u32, style: Interpolation) -> Result<()> {
        let origin = self.attributes.require_vector(POSITION)?;
        self.attributes.set(TWEEN_ORIGIN, origin);
        self.attributes.set(TWEEN_TARGET, target);
        self.attributes.set(TWEEN_FRAME, 0u32);
        self.attributes.set(TWEEN_DURATION, duration);
        self.attributes.set(TWEEN_STYLE, style);
        Ok(())
    }

    /// True while a tween is running.
    pub fn is_tweening(&self) -> bool {
        self.attributes.frames(TWEEN_DURATION).unwrap_or(0) > 0
    }
}
