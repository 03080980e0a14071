//! Component templates.
//!
//! Each submodule defines the attribute keys of one [`ComponentKind`] and a
//! builder that converts into a [`Component`] template.
//!
//! - [`camera`] – view origin published to the renderer
//! - [`followtarget`] – chase a shared point with a capped step
//! - [`position`] – world-space position
//! - [`sprite`] – vector shapes drawn by the basic renderer
//! - [`tween`] – frame-counted interpolated motion
//!
//! [`ComponentKind`]: crate::ecs::component::ComponentKind
//! [`Component`]: crate::ecs::component::Component

pub mod camera;
pub mod followtarget;
pub mod position;
pub mod sprite;
pub mod tween;
