//! Synthia 2D engine library.
//!
//! A small entity-component-system runtime driving a 2D scene from a
//! per-frame update loop. Exposes the ECS core, the component templates and
//! systems built on it, the engine shell and the demo scene, for the binary
//! and for integration tests.

pub mod components;
pub mod ecs;
pub mod engine;
pub mod error;
pub mod game;
pub mod resources;
pub mod systems;
pub mod vector2;
