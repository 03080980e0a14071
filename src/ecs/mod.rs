//! Entity-Component-System runtime.
//!
//! - [`component`] – component kinds, typed attribute store, templates
//! - [`entity`] – entity ids, the id allocator, attach/detach
//! - [`system`] – named per-entity behaviors gated by required kinds
//! - [`scene`] – entity collection, ordered systems, lifecycle hooks

pub mod component;
pub mod entity;
pub mod scene;
pub mod system;
