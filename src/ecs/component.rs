//! Component kinds, attribute values and component templates.
//!
//! A [`Component`] is a template: a [`ComponentKind`] tag plus a set of
//! default [`Attributes`]. Attaching it to an entity records the kind and
//! copies every attribute into the entity's own store (see
//! [`Entity::attach`](super::entity::Entity::attach)).
//!
//! Kinds are a closed enum and compare by variant, never by name. Each kind
//! declares the attributes its template must carry (see
//! [`ComponentKind::schema`]); templates are checked against that schema when
//! they are attached.

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::components::camera::CAMERA;
use crate::components::followtarget::{
    FOLLOW_DISTANCE, FOLLOW_MAX_SPEED, FOLLOW_TARGET, check_follow_value,
};
use crate::components::position::POSITION;
use crate::components::sprite::{SHAPE, Shape};
use crate::components::tween::{
    Interpolation, TWEEN_DURATION, TWEEN_FRAME, TWEEN_ORIGIN, TWEEN_STYLE, TWEEN_TARGET,
};
use crate::error::{EngineError, Result};
use crate::resources::sharedpoint::SharedPoint;
use crate::vector2::Vector2;

/// Closed set of component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ComponentKind {
    FollowTarget,
    VectorSprite,
    Tweenable,
    Camera,
    Position,
}

/// Type tag of an [`AttributeValue`], used for template schemas and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    Frames,
    Vector,
    Point,
    Text,
    Shape,
    Style,
    Flag,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Number => "number",
            ValueType::Frames => "frames",
            ValueType::Vector => "vector",
            ValueType::Point => "point",
            ValueType::Text => "text",
            ValueType::Shape => "shape",
            ValueType::Style => "style",
            ValueType::Flag => "flag",
        }
    }
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::FollowTarget,
        ComponentKind::VectorSprite,
        ComponentKind::Tweenable,
        ComponentKind::Camera,
        ComponentKind::Position,
    ];

    /// Attributes a template of this kind must provide, with their types.
    pub fn schema(self) -> &'static [(&'static str, ValueType)] {
        match self {
            ComponentKind::Position => &[(POSITION, ValueType::Vector)],
            ComponentKind::FollowTarget => &[
                (FOLLOW_TARGET, ValueType::Point),
                (FOLLOW_MAX_SPEED, ValueType::Number),
                (FOLLOW_DISTANCE, ValueType::Number),
            ],
            ComponentKind::Tweenable => &[
                (TWEEN_ORIGIN, ValueType::Vector),
                (TWEEN_TARGET, ValueType::Vector),
                (TWEEN_FRAME, ValueType::Frames),
                (TWEEN_DURATION, ValueType::Frames),
                (TWEEN_STYLE, ValueType::Style),
            ],
            ComponentKind::VectorSprite => &[(SHAPE, ValueType::Shape)],
            ComponentKind::Camera => &[(CAMERA, ValueType::Point)],
        }
    }
}

/// A single attribute value.
///
/// `Point` is the only variant that shares state between entities: cloning it
/// clones the [`SharedPoint`] handle, not the point.
#[derive(Debug, Clone, Serialize)]
pub enum AttributeValue {
    Number(f64),
    Frames(u32),
    Vector(Vector2),
    Point(SharedPoint),
    Text(String),
    Shape(Shape),
    Style(Interpolation),
    Flag(bool),
}

impl AttributeValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            AttributeValue::Number(_) => ValueType::Number,
            AttributeValue::Frames(_) => ValueType::Frames,
            AttributeValue::Vector(_) => ValueType::Vector,
            AttributeValue::Point(_) => ValueType::Point,
            AttributeValue::Text(_) => ValueType::Text,
            AttributeValue::Shape(_) => ValueType::Shape,
            AttributeValue::Style(_) => ValueType::Style,
            AttributeValue::Flag(_) => ValueType::Flag,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Number(v)
    }
}
impl From<u32> for AttributeValue {
    fn from(v: u32) -> Self {
        AttributeValue::Frames(v)
    }
}
impl From<Vector2> for AttributeValue {
    fn from(v: Vector2) -> Self {
        AttributeValue::Vector(v)
    }
}
impl From<SharedPoint> for AttributeValue {
    fn from(v: SharedPoint) -> Self {
        AttributeValue::Point(v)
    }
}
impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}
impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}
impl From<Shape> for AttributeValue {
    fn from(v: Shape) -> Self {
        AttributeValue::Shape(v)
    }
}
impl From<Interpolation> for AttributeValue {
    fn from(v: Interpolation) -> Self {
        AttributeValue::Style(v)
    }
}
impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Flag(v)
    }
}

/// Keyed attribute store.
///
/// Typed getters (`number`, `vector`, ...) return `None` when the key is
/// absent or holds another type. The `require_*` variants turn both cases into
/// an [`EngineError`] so system logic can use `?`.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    values: FxHashMap<String, AttributeValue>,
}

fn type_mismatch(key: &str, expected: ValueType, found: &AttributeValue) -> EngineError {
    EngineError::AttributeType {
        key: key.to_string(),
        expected: expected.name(),
        found: found.value_type().name(),
    }
}

macro_rules! typed_access {
    ($get:ident, $require:ident, $variant:ident, $ty:ty) => {
        pub fn $get(&self, key: &str) -> Option<$ty> {
            match self.values.get(key) {
                Some(AttributeValue::$variant(v)) => Some(v.clone()),
                _ => None,
            }
        }

        pub fn $require(&self, key: &str) -> Result<$ty> {
            match self.values.get(key) {
                Some(AttributeValue::$variant(v)) => Ok(v.clone()),
                Some(other) => Err(type_mismatch(key, ValueType::$variant, other)),
                None => Err(EngineError::MissingAttribute(key.to_string())),
            }
        }
    };
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning the previous value.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` over this store.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in other.values.iter() {
            self.values.insert(key.clone(), value.clone());
        }
    }

    typed_access!(number, require_number, Number, f64);
    typed_access!(frames, require_frames, Frames, u32);
    typed_access!(vector, require_vector, Vector, Vector2);
    typed_access!(point, require_point, Point, SharedPoint);
    typed_access!(text, require_text, Text, String);
    typed_access!(shape, require_shape, Shape, Shape);
    typed_access!(style, require_style, Style, Interpolation);
    typed_access!(flag, require_flag, Flag, bool);
}

/// Serialized with keys in sorted order so snapshots are stable.
impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&str, &AttributeValue> =
            self.values.iter().map(|(k, v)| (k.as_str(), v)).collect();
        sorted.serialize(serializer)
    }
}

/// A component template: a kind plus default attribute values.
#[derive(Debug, Clone)]
pub struct Component {
    kind: ComponentKind,
    data: Attributes,
}

impl Component {
    /// Empty template of the given kind. Fill it with [`Component::with`].
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            data: Attributes::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.data.set(key, value);
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn data(&self) -> &Attributes {
        &self.data
    }

    /// Check the template against its kind's schema.
    ///
    /// Easing styles given by name (`Text`) are resolved to
    /// [`Interpolation`] here, so an unknown style fails at attach time
    /// instead of on the first frame.
    pub fn validate(&mut self) -> Result<()> {
        for &(key, expected) in self.kind.schema() {
            let Some(value) = self.data.values.get_mut(key) else {
                return Err(EngineError::IncompleteTemplate {
                    kind: self.kind,
                    key,
                });
            };
            if expected == ValueType::Style {
                if let AttributeValue::Text(name) = value {
                    *value = AttributeValue::Style(Interpolation::from_str(name)?);
                }
            }
            if value.value_type() != expected {
                return Err(type_mismatch(key, expected, value));
            }
        }
        if self.kind == ComponentKind::FollowTarget {
            check_follow_value(FOLLOW_MAX_SPEED, self.data.require_number(FOLLOW_MAX_SPEED)?)?;
            check_follow_value(FOLLOW_DISTANCE, self.data.require_number(FOLLOW_DISTANCE)?)?;
        }
        Ok(())
    }
}
