//! Raylib-backed render surface.
//!
//! Wraps any raylib draw handle so the engine can draw into a window. Color
//! strings are resolved through [`parse_color`]: common CSS names and
//! `#rrggbb` / `#rrggbbaa` hex codes. Anything else draws magenta and logs a
//! warning once per color.
//!
//! [`TRACKED_KEYS`] lists the keyboard keys the window loop copies into the
//! [`InputSnapshot`] every frame, under their lowercase names.

use raylib::prelude::{Color, KeyboardKey, MouseButton, RaylibDraw};
use rustc_hash::FxHashSet;

use crate::resources::input::{InputSnapshot, POINTER_BUTTONS};
use crate::resources::surface::RenderSurface;

const TEXT_SIZE: i32 = 20;

/// Resolve a color name or hex code.
pub fn parse_color(name: &str) -> Option<Color> {
    let lower = name.trim().to_ascii_lowercase();
    let color = match lower.as_str() {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::RED,
        "green" => Color::GREEN,
        "blue" => Color::BLUE,
        "yellow" => Color::YELLOW,
        "orange" => Color::ORANGE,
        "purple" => Color::PURPLE,
        "pink" => Color::PINK,
        "gray" | "grey" => Color::GRAY,
        "brown" => Color::BROWN,
        "magenta" => Color::MAGENTA,
        hex => {
            let digits = hex.strip_prefix('#')?;
            let value = u32::from_str_radix(digits, 16).ok()?;
            match digits.len() {
                6 => Color::new((value >> 16) as u8, (value >> 8) as u8, value as u8, 255),
                8 => Color::new(
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ),
                _ => return None,
            }
        }
    };
    Some(color)
}

/// Raylib buttons in snapshot index order: left, middle, right.
pub const POINTER_BUTTON_ORDER: [MouseButton; POINTER_BUTTONS] = [
    MouseButton::MOUSE_BUTTON_LEFT,
    MouseButton::MOUSE_BUTTON_MIDDLE,
    MouseButton::MOUSE_BUTTON_RIGHT,
];

pub const TRACKED_KEYS: [(KeyboardKey, &str); 12] = [
    (KeyboardKey::KEY_SPACE, "space"),
    (KeyboardKey::KEY_ENTER, "enter"),
    (KeyboardKey::KEY_ESCAPE, "escape"),
    (KeyboardKey::KEY_LEFT, "left"),
    (KeyboardKey::KEY_RIGHT, "right"),
    (KeyboardKey::KEY_UP, "up"),
    (KeyboardKey::KEY_DOWN, "down"),
    (KeyboardKey::KEY_W, "w"),
    (KeyboardKey::KEY_A, "a"),
    (KeyboardKey::KEY_S, "s"),
    (KeyboardKey::KEY_D, "d"),
    (KeyboardKey::KEY_TAB, "tab"),
];

/// Copy the state of every tracked key into `input`.
pub fn feed_keys(input: &mut InputSnapshot, is_down: impl Fn(KeyboardKey) -> bool) {
    for (key, name) in TRACKED_KEYS {
        input.set_key(name, is_down(key));
    }
}

pub struct RaylibSurface<'a, D: RaylibDraw> {
    draw: &'a mut D,
    width: f64,
    height: f64,
    unknown_colors: FxHashSet<String>,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(draw: &'a mut D, width: u32, height: u32) -> Self {
        Self {
            draw,
            width: width as f64,
            height: height as f64,
            unknown_colors: FxHashSet::default(),
        }
    }

    fn color(&mut self, name: &str) -> Color {
        parse_color(name).unwrap_or_else(|| {
            if self.unknown_colors.insert(name.to_string()) {
                log::warn!("unknown color {name:?}, drawing magenta");
            }
            Color::MAGENTA
        })
    }
}

impl<D: RaylibDraw> RenderSurface for RaylibSurface<'_, D> {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: &str) {
        let c = self.color(color);
        self.draw.clear_background(c);
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        let c = self.color(color);
        self.draw
            .draw_circle_lines(x.round() as i32, y.round() as i32, radius as f32, c);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        let c = self.color(color);
        self.draw.draw_rectangle_lines(
            x.round() as i32,
            y.round() as i32,
            width.round() as i32,
            height.round() as i32,
            c,
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        let c = self.color(color);
        self.draw.draw_rectangle(
            x.round() as i32,
            y.round() as i32,
            width.round() as i32,
            height.round() as i32,
            c,
        );
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
        let c = self.color(color);
        self.draw.draw_line(
            x1.round() as i32,
            y1.round() as i32,
            x2.round() as i32,
            y2.round() as i32,
            c,
        );
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: &str) {
        let c = self.color(color);
        self.draw
            .draw_text(text, x.round() as i32, y.round() as i32, TEXT_SIZE, c);
    }
}
