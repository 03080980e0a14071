//! Long-lived engine state shared with systems and the host.
//!
//! Overview
//! - `gameconfig` – INI-backed engine settings
//! - `input` – pointer, mouse button and keyboard snapshot
//! - `raylibsurface` – windowed render surface (feature `raylib`)
//! - `sharedpoint` – shared mutable point (pointer, camera view)
//! - `surface` – render surface trait and the headless recorder
//! - `worldtime` – frame clock and delta

pub mod gameconfig;
pub mod input;
#[cfg(feature = "raylib")]
pub mod raylibsurface;
pub mod sharedpoint;
pub mod surface;
pub mod worldtime;
