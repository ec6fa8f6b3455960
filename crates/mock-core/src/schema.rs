//! Aggregate schemas.
//!
//! A [`Schema`] describes a struct for the population engine: its members in
//! declaration order, each with the directive text that applies to it and a
//! pair of accessors. Schemas are built once per type and stored in a
//! static, usually through the [`mock_aggregate!`](crate::mock_aggregate)
//! macro:
//!
//! ```rust
//! use mock_core::{mock_aggregate, Mockable};
//!
//! #[derive(Default)]
//! struct User {
//!     name: String,
//!     age: i64,
//!     tags: Vec<String>,
//!     internal: u32,
//! }
//!
//! mock_aggregate!(User {
//!     name: "type(word)",
//!     age: "range(18, 80)",
//!     tags,
//!     internal: "-",
//! });
//!
//! assert!(User::default().is_zero());
//! ```
//!
//! The same schema written by hand:
//!
//! ```rust
//! use mock_core::{Aggregate, Schema};
//! use once_cell::sync::Lazy;
//!
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Aggregate for Point {
//!     fn schema() -> &'static Schema<Self> {
//!         static SCHEMA: Lazy<Schema<Point>> = Lazy::new(|| {
//!             Schema::<Point>::builder()
//!                 .field("x", "range(-100, 100)", |p| &p.x, |p| &mut p.x)
//!                 .field("y", "range(-100, 100)", |p| &p.y, |p| &mut p.y)
//!                 .build()
//!         });
//!         &SCHEMA
//!     }
//! }
//! ```

use crate::directive::EXCLUDE_MARKER;
use crate::target::{AggregateTarget, Member, Mockable};

/// Read accessor for one member.
pub type Getter<T> = fn(&T) -> &dyn Mockable;

/// Write accessor for one member.
pub type GetterMut<T> = fn(&mut T) -> &mut dyn Mockable;

/// Descriptor of one aggregate member.
pub struct FieldSchema<T> {
    name: &'static str,
    directive: String,
    get: Getter<T>,
    get_mut: GetterMut<T>,
}

impl<T> FieldSchema<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Whether the member carries the exclusion marker.
    pub fn is_excluded(&self) -> bool {
        self.directive == EXCLUDE_MARKER
    }
}

/// Member descriptors of an aggregate type, in declaration order.
pub struct Schema<T> {
    fields: Vec<FieldSchema<T>>,
}

impl<T> Schema<T> {
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder { fields: Vec::new() }
    }

    pub fn fields(&self) -> &[FieldSchema<T>] {
        &self.fields
    }

    /// Get a member descriptor by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSchema<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all member names.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// A value is zero when every listed member is zero. Members left out of
    /// the schema are not consulted.
    pub fn is_zero(&self, value: &T) -> bool {
        self.fields.iter().all(|f| (f.get)(value).is_zero())
    }
}

/// Builder for [`Schema`].
pub struct SchemaBuilder<T> {
    fields: Vec<FieldSchema<T>>,
}

impl<T> SchemaBuilder<T> {
    /// Add a member with its directive text. An empty directive applies all
    /// defaults; `"-"` excludes the member.
    pub fn field(
        mut self,
        name: &'static str,
        directive: impl Into<String>,
        get: Getter<T>,
        get_mut: GetterMut<T>,
    ) -> Self {
        self.fields.push(FieldSchema {
            name,
            directive: directive.into(),
            get,
            get_mut,
        });
        self
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
        }
    }
}

/// A struct-like type with a static schema.
pub trait Aggregate: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

impl<T: Aggregate> AggregateTarget for T {
    fn member_count(&self) -> usize {
        T::schema().fields.len()
    }

    fn member(&mut self, index: usize) -> Option<Member<'_>> {
        let field = T::schema().fields.get(index)?;
        Some(Member {
            name: field.name,
            directive: field.directive.as_str(),
            target: (field.get_mut)(self),
        })
    }
}

/// Declare the schema and the [`Mockable`] impl of a struct.
///
/// Every listed member must itself be [`Mockable`]. A member listed without
/// a directive uses the empty directive; unlisted members are never touched.
///
/// Preset detection only sees listed members: a nested struct whose only
/// non-zero values sit in unlisted members counts as zero, so its listed
/// members are filled. List a member with `"-"` to have it count as a preset
/// without ever being generated.
#[macro_export]
macro_rules! mock_aggregate {
    (@directive) => {
        ""
    };
    (@directive $directive:expr) => {
        $directive
    };
    ($ty:ty { $($field:ident $(: $directive:expr)?),* $(,)? }) => {
        impl $crate::Aggregate for $ty {
            fn schema() -> &'static $crate::Schema<Self> {
                static SCHEMA: $crate::__private::Lazy<$crate::Schema<$ty>> =
                    $crate::__private::Lazy::new(|| {
                        $crate::Schema::<$ty>::builder()
                            $(
                                .field(
                                    stringify!($field),
                                    $crate::mock_aggregate!(@directive $($directive)?),
                                    |t| &t.$field,
                                    |t| &mut t.$field,
                                )
                            )*
                            .build()
                    });
                &SCHEMA
            }
        }

        impl $crate::Mockable for $ty {
            fn kind(&self) -> $crate::FieldKind {
                $crate::FieldKind::Aggregate
            }

            fn is_zero(&self) -> bool {
                <$ty as $crate::Aggregate>::schema().is_zero(self)
            }

            fn shape(&mut self) -> $crate::Shape<'_> {
                $crate::Shape::Aggregate(self)
            }
        }
    };
}
