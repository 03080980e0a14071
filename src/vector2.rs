//! 2D vector value type.
//!
//! [`Vector2`] is a plain `Copy` value: every operation returns a new vector
//! and never touches the receiver. Besides the usual arithmetic it carries the
//! blend operators used by tweens ([`lerp`](Vector2::lerp),
//! [`ease_in`](Vector2::ease_in), [`ease_out`](Vector2::ease_out),
//! [`elastic`](Vector2::elastic)).
//!
//! All blend operators share the same shape: `self + (target - self) * f(t)`,
//! where `f` is the blend factor. `t` is never clamped, so values outside
//! `[0, 1]` extrapolate.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

/// Default decay rate of the elastic blend.
pub const DEFAULT_ELASTIC_FIRMNESS: f64 = 10.0;
/// Default oscillation period of the elastic blend, in normalized time.
pub const DEFAULT_ELASTIC_STRETCH: f64 = 0.1;

/// Tunables for [`Vector2::elastic_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticParams {
    /// Exponential decay rate. Higher settles faster.
    pub firmness: f64,
    /// Oscillation period.
    pub stretch: f64,
}

impl Default for ElasticParams {
    fn default() -> Self {
        Self {
            firmness: DEFAULT_ELASTIC_FIRMNESS,
            stretch: DEFAULT_ELASTIC_STRETCH,
        }
    }
}

impl ElasticParams {
    /// Blend factor for normalized progress `t`.
    ///
    /// `2^(-firmness·t) · sin((t - stretch/4) · 2π / stretch) + 1`
    pub fn factor(&self, t: f64) -> f64 {
        (-self.firmness * t).exp2() * ((t - self.stretch / 4.0) * TAU / self.stretch).sin() + 1.0
    }
}

/// A 2D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: Vector2) -> f64 {
        other.subtract(*self).magnitude()
    }

    pub fn add(&self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(&self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    /// Round both components to the nearest integer (halves away from zero).
    pub fn round(&self) -> Vector2 {
        Vector2::new(self.x.round(), self.y.round())
    }

    /// Limit the magnitude to `max_magnitude`.
    ///
    /// Only acts when the magnitude strictly exceeds the bound; otherwise the
    /// vector comes back unchanged. The result keeps the original direction.
    /// A negative or NaN bound is treated as zero.
    pub fn clamp(&self, max_magnitude: f64) -> Vector2 {
        let max_magnitude = max_magnitude.max(0.0);
        let magnitude = self.magnitude();
        if magnitude <= max_magnitude {
            return *self;
        }
        self.scale(max_magnitude / magnitude)
    }

    /// Linear blend towards `target`.
    pub fn lerp(&self, target: Vector2, t: f64) -> Vector2 {
        self.blend(target, t)
    }

    /// Blend towards `target` with factor `t²` (slow start).
    pub fn ease_out(&self, target: Vector2, t: f64) -> Vector2 {
        self.blend(target, t * t)
    }

    /// Blend towards `target` with factor `1 - (1 - t)²` (slow finish).
    pub fn ease_in(&self, target: Vector2, t: f64) -> Vector2 {
        let inv = 1.0 - t;
        self.blend(target, 1.0 - inv * inv)
    }

    /// Damped-oscillation blend with the default [`ElasticParams`].
    pub fn elastic(&self, target: Vector2, t: f64) -> Vector2 {
        self.elastic_with(target, t, &ElasticParams::default())
    }

    /// Damped-oscillation blend with explicit tunables.
    ///
    /// Starts exactly at `self` for `t = 0` and lands close to (not exactly
    /// on) `target` for `t = 1`.
    pub fn elastic_with(&self, target: Vector2, t: f64, params: &ElasticParams) -> Vector2 {
        self.blend(target, params.factor(t))
    }

    fn blend(&self, target: Vector2, factor: f64) -> Vector2 {
        self.add(target.subtract(*self).scale(factor))
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(&self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        self.scale(-1.0)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
