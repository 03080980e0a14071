//! Engine error type.
//!
//! Everything that can go wrong inside the ECS runtime is reported through
//! [`EngineError`]. Configuration problems (bad shapes, unknown easing styles,
//! malformed templates) are caught when components are built or attached;
//! [`EngineError::SystemFault`] is what a system's logic returns to abort the
//! rest of a frame.

use crate::ecs::component::ComponentKind;

/// Errors produced by the engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// An interpolation style name that does not map to any [`Interpolation`](crate::components::tween::Interpolation).
    #[error("unknown interpolation style: {0:?}")]
    UnknownInterpolation(String),

    /// A shape tag that does not map to any [`Shape`](crate::components::sprite::Shape) variant.
    #[error("unknown shape tag: {0:?}")]
    UnknownShape(String),

    /// Shape parameters outside their valid range.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// An attribute a component or system needs is not present.
    #[error("missing attribute {0:?}")]
    MissingAttribute(String),

    /// A component template is missing an attribute its kind declares.
    #[error("{kind:?} template is missing attribute {key:?}")]
    IncompleteTemplate {
        /// Component kind of the template.
        kind: ComponentKind,
        /// Attribute key the kind declares.
        key: &'static str,
    },

    /// An attribute is present but holds a value of the wrong type.
    #[error("attribute {key:?} should be {expected}, found {found}")]
    AttributeType {
        /// Attribute key.
        key: String,
        /// Expected value type.
        expected: &'static str,
        /// Actual value type.
        found: &'static str,
    },

    /// An entity id that is already present in the scene.
    #[error("entity #{0} is already in the scene")]
    DuplicateEntity(u64),

    /// An attribute value outside its valid range.
    #[error("invalid attribute {key:?}: {reason}")]
    InvalidAttribute {
        /// Attribute key.
        key: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// Invalid configuration file or value.
    #[error("config error: {0}")]
    Config(String),

    /// I/O failure while reading or writing engine files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A system's logic failed for an entity; the frame is aborted.
    #[error("system {system:?} failed on entity {entity}: {reason}")]
    SystemFault {
        /// Name of the failing system.
        system: String,
        /// Raw id of the entity being processed.
        entity: u64,
        /// Underlying cause.
        reason: Box<EngineError>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
