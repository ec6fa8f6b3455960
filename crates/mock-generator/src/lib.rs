//! Population engine for the structmock framework.
//!
//! This crate provides the [`Mocker`] which fills typed values with random
//! data driven by per-field directives. The mocker uses a seeded RNG, so a
//! session replays the same values for the same seed and calls.
//!
//! # Architecture
//!
//! ```text
//! directive text ("type(word) range(3, 8)")
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │       Mocker         │
//! │                      │
//! │  - random (StdRng)   │
//! │  - tags / formats    │
//! │  - gen funcs         │
//! │  - domain generator  │
//! └──────────┬───────────┘
//!            │  Resolver -> Shape dispatch -> generators
//!            ▼
//!     &mut T (any Mockable)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::mock_aggregate;
//! use mock_generator::Mocker;
//!
//! #[derive(Default)]
//! struct User {
//!     name: String,
//!     email: String,
//!     age: u8,
//!     friends: Vec<String>,
//! }
//!
//! mock_aggregate!(User {
//!     name: "type(word) range(3, 8)",
//!     email: "type(email)",
//!     age: "range(18, 65)",
//!     friends: "range(0, 4)",
//! });
//!
//! let mut mocker = Mocker::with_seed(42);
//! let mut user = User::default();
//! mocker.mock("", &mut user).unwrap();
//! assert!((18..65).contains(&user.age));
//! assert!(user.email.contains('@'));
//! ```
//!
//! # Directives
//!
//! - `range(min, max)` / `range(n)` - Bounds, lengths and counts in `[min, max)`
//! - `type(kind)` - Domain kind: `email`, `date`, `phone`, `url`, `ipv4`,
//!   `domain`, `word`, `sentence`
//! - `value(a, b, ...)` - Literal alternatives
//! - `key(...)` / `elem(...)` - Map key and element directives (or tag names)
//! - `format(...)` - Date format or format-dictionary name
//! - `tag(name)` - Replace with a tag-dictionary entry
//! - `mock(name)` - Custom generator function
//! - `valid(name)` - Custom validator name (stored only)

pub mod error;
pub mod generators;
pub mod mocker;
pub mod random;
pub mod resolver;

// Re-exports for convenience
pub use error::MockError;
pub use generators::domain::{DomainGenerator, TemplateDomainGenerator};
pub use mocker::{gen_func, GenFunc, GenFuncs, MockOptions, Mocker, ValidFunc, ValidFuncs};
pub use random::RandomSource;
pub use resolver::{Resolved, Resolver};
