use crate::body::BodyId;
use std::fmt;

/// Errors raised by the body registry and by parameter validation.
/// Nothing inside `PhysicsEngine::step` can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A construction input was out of range or not finite
    InvalidConfiguration { field: &'static str, value: f64 },
    /// Lookup of a handle the registry never issued
    NotFound(BodyId),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidConfiguration { field, value } => {
                write!(f, "invalid configuration: {field} = {value}")
            }
            PhysicsError::NotFound(id) => write!(f, "body {id} not found"),
        }
    }
}

impl std::error::Error for PhysicsError {}
