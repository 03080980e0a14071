//! Engine systems.
//!
//! Submodules overview
//! - [`camera`] – publish the camera entity's position as the view origin
//! - [`followtarget`] – step followers towards their target point
//! - [`render`] – draw vector sprites relative to the camera
//! - [`time`] – advance the frame clock from host timestamps
//! - [`tween`] – advance frame-counted tweens

pub mod camera;
pub mod followtarget;
pub mod render;
pub mod time;
pub mod tween;
