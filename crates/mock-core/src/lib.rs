//! Core types for the structmock framework.
//!
//! This crate provides the foundational types used by the population
//! engine, including:
//!
//! - [`Directive`] - Resolved per-field generation contract
//! - [`parse_directive`] - Directive text parser and validator
//! - [`DirectiveError`] - Structured parse and validation errors
//! - [`Mockable`] / [`Shape`] - Target model the engine walks
//! - [`Schema`] / [`mock_aggregate!`] - Member descriptors for structs
//! - [`MockerConfig`] - Seed and named dictionaries loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    └─── mock-generator   (depends on mock-core for the directive
//!                           parser and the target model)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{parse_directive, DomainKind, FieldKind};
//!
//! let directive = parse_directive(FieldKind::String, "type(word) range(3, 8)").unwrap();
//! assert_eq!(directive.domain, Some(DomainKind::Word));
//! assert_eq!((directive.min, directive.max), (3, 8));
//! ```

pub mod config;
pub mod directive;
pub mod error;
pub mod kind;
pub mod parser;
pub mod schema;
pub mod target;

// Re-exports for convenience
pub use config::{ConfigError, MockerConfig};
pub use directive::{Directive, DomainKind, Literal, DEFAULT_MAX, DEFAULT_MIN, EXCLUDE_MARKER};
pub use error::DirectiveError;
pub use kind::FieldKind;
pub use parser::parse_directive;
pub use schema::{Aggregate, FieldSchema, Schema, SchemaBuilder};
pub use target::{
    AggregateTarget, AnySlot, Elements, MapKey, MapTarget, Member, Mockable, ScalarTarget, Shape,
    SequenceTarget,
};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
