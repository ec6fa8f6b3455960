//! Directive parse and validation errors.

use std::fmt::Display;
use thiserror::Error;

/// Error produced while parsing or validating directive text.
///
/// Both variants keep their parts as plain strings so tests can compare
/// them exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// A directive argument has the wrong shape.
    #[error("{name} expects {expect}, got {param}")]
    Param {
        /// Directive name, e.g. `range`
        name: String,
        /// Description of the expected argument
        expect: String,
        /// Offending raw argument
        param: String,
    },

    /// Two settings disagree.
    #[error("{name1}({param1}) conflicts with {name2}({param2}): {detail}")]
    Conflict {
        name1: String,
        param1: String,
        name2: String,
        param2: String,
        /// Why the two settings disagree
        detail: String,
    },
}

impl DirectiveError {
    /// Build a [`DirectiveError::Param`].
    pub fn param(name: impl Into<String>, expect: impl Into<String>, param: impl Display) -> Self {
        Self::Param {
            name: name.into(),
            expect: expect.into(),
            param: param.to_string(),
        }
    }

    /// Build a [`DirectiveError::Conflict`].
    pub fn conflict(
        name1: impl Into<String>,
        param1: impl Display,
        name2: impl Into<String>,
        param2: impl Display,
        detail: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            name1: name1.into(),
            param1: param1.to_string(),
            name2: name2.into(),
            param2: param2.to_string(),
            detail: detail.into(),
        }
    }
}
