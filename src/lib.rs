//! structmock
//!
//! Fill typed Rust values with random but constrained test data, driven by
//! short per-field directives such as `type(email)` or `range(18, 65)`.
//!
//! # Features
//!
//! - Scalars: booleans, every integer width, floats and strings
//! - Domain strings: email, phone, url, ipv4, domain, word, sentence, date
//! - Containers: `Vec<T>`, `[T; N]`, `HashMap<String, V>`, `BTreeMap<String, V>`
//! - Structs: member directives declared once with [`mock_aggregate!`]
//! - Reuse: tag and format dictionaries, custom generator functions
//! - Reproducibility: every session is seeded
//!
//! # Workspace Crates
//!
//! - `mock_core` - Directive grammar, target model, schemas, configuration
//! - `mock_generator` - The [`Mocker`] session and value generators
//!
//! # Usage
//!
//! ```rust
//! use structmock::{mock_aggregate, Mocker, MockerConfig};
//!
//! #[derive(Default)]
//! struct Order {
//!     id: u64,
//!     customer: String,
//!     note: String,
//!     created: String,
//! }
//!
//! mock_aggregate!(Order {
//!     id: "range(1000, 2000)",
//!     customer: "tag(person)",
//!     note: "-",
//!     created: "type(date) format(day)",
//! });
//!
//! let config = MockerConfig::new(42)
//!     .with_tag("person", "type(word) range(4, 9)")
//!     .with_format("day", "%Y-%m-%d");
//!
//! let mut mocker = Mocker::from_config(&config);
//! let mut order = Order::default();
//! mocker.mock("", &mut order).unwrap();
//!
//! assert!((1000..2000).contains(&order.id));
//! assert!(order.note.is_empty());
//! assert_eq!(order.created.len(), 10);
//! ```

pub use mock_core;
pub use mock_generator;

pub use mock_core::{
    mock_aggregate, parse_directive, Aggregate, ConfigError, Directive, DirectiveError,
    DomainKind, FieldKind, Literal, MockerConfig, Mockable, Schema, Shape,
};
pub use mock_generator::{
    gen_func, DomainGenerator, GenFunc, GenFuncs, MockError, MockOptions, Mocker,
    TemplateDomainGenerator, ValidFunc, ValidFuncs,
};
