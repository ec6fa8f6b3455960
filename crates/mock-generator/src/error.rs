//! Error types for the population engine.

use mock_core::{DirectiveError, FieldKind};
use std::any::TypeId;
use thiserror::Error;

/// Errors recorded while populating a target.
///
/// Population is best effort: these are collected during a call and the
/// most recent one is returned when the call finishes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MockError {
    /// A directive failed to parse or resolve.
    #[error("Directive error: {0}")]
    Directive(#[from] DirectiveError),

    /// Map keys of this kind cannot be generated.
    #[error("Unsupported map key type: {0}")]
    UnsupportedMapKey(FieldKind),

    /// A generator function returned a value of the wrong type.
    #[error("Generator function '{name}' returned a value that is not {expected}")]
    GenFuncType { name: String, expected: FieldKind },

    /// `mock_dyn` was called with a type that was never registered.
    #[error("Target type {0:?} is not registered")]
    UnregisteredTarget(TypeId),
}
