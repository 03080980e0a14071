//! Shared input snapshot.
//!
//! The host's input capture writes pointer and keyboard state into an
//! [`InputSnapshot`]; systems only read it. The pointer position lives in a
//! [`SharedPoint`] so components can hold on to it directly (see
//! [`FollowTarget::pointer`](crate::components::followtarget::FollowTarget::pointer)).
//!
//! Key identifiers are case-insensitive: `"A"` and `"a"` are the same key.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::resources::sharedpoint::SharedPoint;
use crate::vector2::Vector2;

/// Number of tracked pointer buttons (left, middle, right).
pub const POINTER_BUTTONS: usize = 3;

/// Snapshot shared between the input writer and the engine.
pub type SharedInput = Rc<RefCell<InputSnapshot>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button/key state with edge flags.
pub struct BoolState {
    /// Whether the button or key is currently held.
    pub active: bool,
    /// Went down since the last [`InputSnapshot::end_frame`].
    pub just_pressed: bool,
    /// Went up since the last [`InputSnapshot::end_frame`].
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, active: bool) {
        if active && !self.active {
            self.just_pressed = true;
        }
        if !active && self.active {
            self.just_released = true;
        }
        self.active = active;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

#[derive(Debug, Default)]
pub struct InputSnapshot {
    pointer: SharedPoint,
    buttons: [BoolState; POINTER_BUTTONS],
    keys: FxHashMap<String, BoolState>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh snapshot for sharing.
    pub fn shared() -> SharedInput {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Current pointer position (world space).
    pub fn pointer(&self) -> Vector2 {
        self.pointer.get()
    }

    /// Handle to the pointer point. Every clone follows the live pointer.
    pub fn pointer_handle(&self) -> SharedPoint {
        self.pointer.clone()
    }

    pub fn set_pointer(&self, position: Vector2) {
        self.pointer.set(position);
    }

    /// Record a pointer button state. Indices past [`POINTER_BUTTONS`] are ignored.
    pub fn set_button(&mut self, index: usize, down: bool) {
        match self.buttons.get_mut(index) {
            Some(state) => state.update(down),
            None => log::debug!("ignoring pointer button {index}"),
        }
    }

    pub fn button(&self, index: usize) -> BoolState {
        self.buttons.get(index).copied().unwrap_or_default()
    }

    pub fn is_button_down(&self, index: usize) -> bool {
        self.button(index).active
    }

    pub fn set_key(&mut self, key: &str, pressed: bool) {
        self.keys
            .entry(key.to_lowercase())
            .or_default()
            .update(pressed);
    }

    /// State of `key`; unknown keys read as released.
    pub fn key(&self, key: &str) -> BoolState {
        self.keys
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.key(key).active
    }

    /// Clear `just_pressed`/`just_released` flags. Call once per frame after
    /// systems have run.
    pub fn end_frame(&mut self) {
        for b in self.buttons.iter_mut() {
            b.clear_edges();
        }
        for k in self.keys.values_mut() {
            k.clear_edges();
        }
    }
}
