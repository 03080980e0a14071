//! Tween component.
//!
//! A tweenable entity moves its [`Position`](super::position) from
//! `tween_origin` to `tween_target` over `tween_duration` frames. The blend
//! curve is chosen by `tween_style`, an [`Interpolation`]. A duration of `0`
//! means no tween is running. See [`crate::systems::tween`] for the update
//! system and [`Entity::start_tween`](crate::ecs::entity::Entity::start_tween)
//! to launch a new tween on a live entity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ecs::component::{Component, ComponentKind};
use crate::error::EngineError;
use crate::vector2::{ElasticParams, Vector2};

pub const TWEEN_ORIGIN: &str = "tween_origin";
pub const TWEEN_TARGET: &str = "tween_target";
pub const TWEEN_FRAME: &str = "tween_frame";
pub const TWEEN_DURATION: &str = "tween_duration";
pub const TWEEN_STYLE: &str = "tween_style";

/// Signature shared by every interpolation function.
pub type InterpolationFn = fn(Vector2, Vector2, f64, &ElasticParams) -> Vector2;

/// Blend curves available to tweens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interpolation {
    /// Constant speed.
    Lerp,
    /// Factor `1 - (1 - t)²`: fast start, slow finish.
    EaseIn,
    /// Factor `t²`: slow start, fast finish.
    EaseOut,
    /// Damped oscillation around the target.
    Elastic,
}

fn lerp(a: Vector2, b: Vector2, t: f64, _: &ElasticParams) -> Vector2 {
    a.lerp(b, t)
}

fn ease_in(a: Vector2, b: Vector2, t: f64, _: &ElasticParams) -> Vector2 {
    a.ease_in(b, t)
}

fn ease_out(a: Vector2, b: Vector2, t: f64, _: &ElasticParams) -> Vector2 {
    a.ease_out(b, t)
}

fn elastic(a: Vector2, b: Vector2, t: f64, params: &ElasticParams) -> Vector2 {
    a.elastic_with(b, t, params)
}

/// Dispatch table, indexed by the enum discriminant.
const INTERPOLATORS: [(Interpolation, InterpolationFn); 4] = [
    (Interpolation::Lerp, lerp),
    (Interpolation::EaseIn, ease_in),
    (Interpolation::EaseOut, ease_out),
    (Interpolation::Elastic, elastic),
];

impl Interpolation {
    pub const ALL: [Interpolation; 4] = [
        Interpolation::Lerp,
        Interpolation::EaseIn,
        Interpolation::EaseOut,
        Interpolation::Elastic,
    ];

    /// The function implementing this curve.
    pub fn function(self) -> InterpolationFn {
        INTERPOLATORS[self as usize].1
    }

    /// Blend `origin` towards `target` at progress `t`.
    pub fn apply(self, origin: Vector2, target: Vector2, t: f64, params: &ElasticParams) -> Vector2 {
        (self.function())(origin, target, t, params)
    }

    /// Canonical style name.
    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Lerp => "lerp",
            Interpolation::EaseIn => "easeIn",
            Interpolation::EaseOut => "easeOut",
            Interpolation::Elastic => "elastic",
        }
    }
}

impl FromStr for Interpolation {
    type Err = EngineError;

    /// Accepts the camelCase names (`easeIn`) and snake_case (`ease_in`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lerp" | "linear" => Ok(Interpolation::Lerp),
            "easeIn" | "ease_in" => Ok(Interpolation::EaseIn),
            "easeOut" | "ease_out" => Ok(Interpolation::EaseOut),
            "elastic" => Ok(Interpolation::Elastic),
            other => Err(EngineError::UnknownInterpolation(other.to_string())),
        }
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for a [`ComponentKind::Tweenable`] template.
///
/// `Tweenable::new(style)` gives an inert tween (duration 0); use
/// [`with_tween`](Tweenable::with_tween) to start moving right away.
#[derive(Clone, Debug)]
pub struct Tweenable {
    pub origin: Vector2,
    pub target: Vector2,
    /// Duration in frames.
    pub duration: u32,
    pub style: Interpolation,
}

impl Tweenable {
    pub fn new(style: Interpolation) -> Self {
        Tweenable {
            origin: Vector2::ZERO,
            target: Vector2::ZERO,
            duration: 0,
            style,
        }
    }

    pub fn with_tween(mut self, origin: Vector2, target: Vector2, duration: u32) -> Self {
        self.origin = origin;
        self.target = target;
        self.duration = duration;
        self
    }

    pub fn with_style(mut self, style: Interpolation) -> Self {
        self.style = style;
        self
    }
}

impl From<Tweenable> for Component {
    fn from(tw: Tweenable) -> Self {
        Component::new(ComponentKind::Tweenable)
            .with(TWEEN_ORIGIN, tw.origin)
            .with(TWEEN_TARGET, tw.target)
            .with(TWEEN_FRAME, 0u32)
            .with(TWEEN_DURATION, tw.duration)
            .with(TWEEN_STYLE, tw.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table_matches_enum_order() {
        for (i, style) in Interpolation::ALL.iter().enumerate() {
            assert_eq!(INTERPOLATORS[i].0, *style);
        }
    }

    #[test]
    fn test_apply_dispatches_to_vector_methods() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(100.0, 50.0);
        let p = ElasticParams::default();
        let t = 0.3;
        assert_eq!(Interpolation::Lerp.apply(a, b, t, &p), a.lerp(b, t));
        assert_eq!(Interpolation::EaseIn.apply(a, b, t, &p), a.ease_in(b, t));
        assert_eq!(Interpolation::EaseOut.apply(a, b, t, &p), a.ease_out(b, t));
        assert_eq!(Interpolation::Elastic.apply(a, b, t, &p), a.elastic(b, t));
    }

    #[test]
    fn test_parse_style_names() {
        assert_eq!("lerp".parse::<Interpolation>().unwrap(), Interpolation::Lerp);
        assert_eq!("easeIn".parse::<Interpolation>().unwrap(), Interpolation::EaseIn);
        assert_eq!("ease_out".parse::<Interpolation>().unwrap(), Interpolation::EaseOut);
        assert_eq!("elastic".parse::<Interpolation>().unwrap(), Interpolation::Elastic);
        assert!("bounce".parse::<Interpolation>().is_err());
        assert!("EASEIN".parse::<Interpolation>().is_err());
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for style in Interpolation::ALL {
            assert_eq!(style.name().parse::<Interpolation>().unwrap(), style);
        }
    }

    #[test]
    fn test_tweenable_template_defaults_to_inert() {
        let c: Component = Tweenable::new(Interpolation::Lerp).into();
        assert_eq!(c.kind(), ComponentKind::Tweenable);
        assert_eq!(c.data().frames(TWEEN_DURATION), Some(0));
        assert_eq!(c.data().frames(TWEEN_FRAME), Some(0));
        assert_eq!(c.data().style(TWEEN_STYLE), Some(Interpolation::Lerp));
    }

    #[test]
    fn test_tweenable_with_tween() {
        let c: Component = Tweenable::new(Interpolation::Elastic)
            .with_tween(Vector2::new(1.0, 1.0), Vector2::new(9.0, 9.0), 30)
            .into();
        assert_eq!(c.data().vector(TWEEN_ORIGIN), Some(Vector2::new(1.0, 1.0)));
        assert_eq!(c.data().vector(TWEEN_TARGET), Some(Vector2::new(9.0, 9.0)));
        assert_eq!(c.data().frames(TWEEN_DURATION), Some(30));
    }
}
