//! Mock target model.
//!
//! Every type the population engine can fill implements [`Mockable`]. A
//! target reports its primitive [`FieldKind`] (the label the parser checks
//! directives against), whether it still holds its zero value, and its
//! structural [`Shape`]. The engine dispatches on the shape and never needs
//! to know the concrete type.
//!
//! ```text
//! Mockable
//!    │
//!    ├── indirect()  Box<T>, Option<T>          -> one level down
//!    │
//!    └── shape()
//!          ├── Scalar      bool, integers, floats, String
//!          ├── Aggregate   structs with a Schema
//!          ├── Sequence    Vec<T>
//!          ├── FixedArray  [T; N]
//!          ├── Map         HashMap<K, V>, BTreeMap<K, V>
//!          └── Unsupported ()
//! ```

use crate::directive::Literal;
use crate::kind::FieldKind;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Assign a type-erased value to a concrete target.
///
/// Implemented for every `'static` type, so any `dyn Mockable` can accept
/// the output of a custom generator function.
pub trait AnySlot {
    /// Replace `self` with `value` if it holds the same type, otherwise hand
    /// the value back.
    fn set_any(&mut self, value: Box<dyn Any + Send>) -> Result<(), Box<dyn Any + Send>>;
}

impl<T: Any> AnySlot for T {
    fn set_any(&mut self, value: Box<dyn Any + Send>) -> Result<(), Box<dyn Any + Send>> {
        *self = *value.downcast::<T>()?;
        Ok(())
    }
}

/// A value the population engine can fill.
pub trait Mockable: AnySlot + 'static {
    /// Primitive kind used when parsing directives for this target.
    fn kind(&self) -> FieldKind;

    /// Whether the value is its type's zero value. Aggregate members that
    /// are not zero count as presets and are never overwritten.
    fn is_zero(&self) -> bool;

    /// Structural shape driving population.
    fn shape(&mut self) -> Shape<'_>;

    /// One level of indirection to follow before anything else happens.
    fn indirect(&mut self) -> Option<&mut dyn Mockable> {
        None
    }
}

/// Structural classification of a target.
pub enum Shape<'a> {
    Scalar(&'a mut dyn ScalarTarget),
    Aggregate(&'a mut dyn AggregateTarget),
    Sequence(&'a mut dyn SequenceTarget),
    FixedArray(&'a mut dyn Elements),
    Map(&'a mut dyn MapTarget),
    /// Skipped without error
    Unsupported,
}

/// Leaf value receiving a generated literal.
pub trait ScalarTarget {
    /// Store a generated value. Integers narrower than 64 bits and `f32`
    /// are converted with `as` casts.
    fn store(&mut self, value: Literal);
}

/// Indexable elements of a sequence or fixed-size array.
pub trait Elements {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Mockable>;
}

/// Growable sequence.
pub trait SequenceTarget: Elements {
    /// Replace the contents with `len` default elements.
    fn reset(&mut self, len: usize);
}

/// Associative map.
pub trait MapTarget {
    /// Kind of the map's keys; only `String` keys can be generated.
    fn key_kind(&self) -> FieldKind;

    fn clear(&mut self);

    /// Insert `key` mapped to a default value that `fill` populates first.
    /// Returns `false` if the key type cannot hold a generated string.
    fn insert_with(&mut self, key: String, fill: &mut dyn FnMut(&mut dyn Mockable)) -> bool;
}

/// A struct-like value with named members.
pub trait AggregateTarget {
    fn member_count(&self) -> usize;

    fn member(&mut self, index: usize) -> Option<Member<'_>>;
}

/// One aggregate member borrowed for population.
pub struct Member<'a> {
    pub name: &'static str,
    /// Directive text attached to the member
    pub directive: &'static str,
    pub target: &'a mut dyn Mockable,
}

/// Key types usable in a mocked map.
pub trait MapKey: Sized {
    const KIND: FieldKind;

    /// Convert a generated key string; `None` for non-string keys.
    fn from_generated(key: String) -> Option<Self>;
}

impl MapKey for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_generated(key: String) -> Option<Self> {
        Some(key)
    }
}

macro_rules! impl_non_string_key {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl MapKey for $t {
                const KIND: FieldKind = $kind;

                fn from_generated(_key: String) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

impl_non_string_key! {
    bool => FieldKind::Bool,
    i8 => FieldKind::I8,
    i16 => FieldKind::I16,
    i32 => FieldKind::I32,
    i64 => FieldKind::I64,
    isize => FieldKind::Isize,
    u8 => FieldKind::U8,
    u16 => FieldKind::U16,
    u32 => FieldKind::U32,
    u64 => FieldKind::U64,
    usize => FieldKind::Usize,
}

// ============================================================================
// Scalars
// ============================================================================

macro_rules! impl_int_scalar {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl Mockable for $t {
                fn kind(&self) -> FieldKind {
                    $kind
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn shape(&mut self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }

            impl ScalarTarget for $t {
                fn store(&mut self, value: Literal) {
                    match value {
                        Literal::Int(i) => *self = i as $t,
                        Literal::Uint(u) => *self = u as $t,
                        _ => {}
                    }
                }
            }
        )*
    };
}

impl_int_scalar! {
    i8 => FieldKind::I8,
    i16 => FieldKind::I16,
    i32 => FieldKind::I32,
    i64 => FieldKind::I64,
    isize => FieldKind::Isize,
    u8 => FieldKind::U8,
    u16 => FieldKind::U16,
    u32 => FieldKind::U32,
    u64 => FieldKind::U64,
    usize => FieldKind::Usize,
}

macro_rules! impl_float_scalar {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl Mockable for $t {
                fn kind(&self) -> FieldKind {
                    $kind
                }

                fn is_zero(&self) -> bool {
                    *self == 0.0
                }

                fn shape(&mut self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }

            impl ScalarTarget for $t {
                fn store(&mut self, value: Literal) {
                    if let Literal::Float(f) = value {
                        *self = f as $t;
                    }
                }
            }
        )*
    };
}

impl_float_scalar! {
    f32 => FieldKind::F32,
    f64 => FieldKind::F64,
}

impl Mockable for bool {
    fn kind(&self) -> FieldKind {
        FieldKind::Bool
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}

impl ScalarTarget for bool {
    fn store(&mut self, value: Literal) {
        if let Literal::Bool(b) = value {
            *self = b;
        }
    }
}

impl Mockable for String {
    fn kind(&self) -> FieldKind {
        FieldKind::String
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}

impl ScalarTarget for String {
    fn store(&mut self, value: Literal) {
        if let Literal::Str(s) = value {
            *self = s;
        }
    }
}

impl Mockable for () {
    fn kind(&self) -> FieldKind {
        FieldKind::Other
    }

    fn is_zero(&self) -> bool {
        true
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Unsupported
    }
}

// ============================================================================
// Indirections
// ============================================================================

impl<T: Mockable> Mockable for Box<T> {
    fn kind(&self) -> FieldKind {
        FieldKind::Other
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }

    fn indirect(&mut self) -> Option<&mut dyn Mockable> {
        Some(&mut **self)
    }
}

impl<T: Mockable + Default> Mockable for Option<T> {
    fn kind(&self) -> FieldKind {
        FieldKind::Other
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn shape(&mut self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Unsupported,
        }
    }

    /// A `None` target is allocated with `T::default()` before descending.
    fn indirect(&mut self) -> Option<&mut dyn Mockable> {
        Some(self.get_or_insert_with(T::default))
    }
}

// ============================================================================
// Sequences and arrays
// ============================================================================

impl<T: Mockable + Default> Mockable for Vec<T> {
    fn kind(&self) -> FieldKind {
        FieldKind::Sequence
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Mockable> Elements for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Mockable> {
        self.get_mut(index).map(|e| e as &mut dyn Mockable)
    }
}

impl<T: Mockable + Default> SequenceTarget for Vec<T> {
    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }
}

impl<T: Mockable, const N: usize> Mockable for [T; N] {
    fn kind(&self) -> FieldKind {
        FieldKind::Array
    }

    fn is_zero(&self) -> bool {
        self.iter().all(Mockable::is_zero)
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::FixedArray(self)
    }
}

impl<T: Mockable, const N: usize> Elements for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Mockable> {
        self.get_mut(index).map(|e| e as &mut dyn Mockable)
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<K, V, S> Mockable for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash + 'static,
    V: Mockable + Default,
    S: BuildHasher + 'static,
{
    fn kind(&self) -> FieldKind {
        FieldKind::Map
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Map(self)
    }
}

impl<K, V, S> MapTarget for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Mockable + Default,
    S: BuildHasher,
{
    fn key_kind(&self) -> FieldKind {
        K::KIND
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn insert_with(&mut self, key: String, fill: &mut dyn FnMut(&mut dyn Mockable)) -> bool {
        let Some(key) = K::from_generated(key) else {
            return false;
        };
        let mut value = V::default();
        fill(&mut value);
        self.insert(key, value);
        true
    }
}

impl<K, V> Mockable for BTreeMap<K, V>
where
    K: MapKey + Ord + 'static,
    V: Mockable + Default,
{
    fn kind(&self) -> FieldKind {
        FieldKind::Map
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Map(self)
    }
}

impl<K, V> MapTarget for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Mockable + Default,
{
    fn key_kind(&self) -> FieldKind {
        K::KIND
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn insert_with(&mut self, key: String, fill: &mut dyn FnMut(&mut dyn Mockable)) -> bool {
        let Some(key) = K::from_generated(key) else {
            return false;
        };
        let mut value = V::default();
        fill(&mut value);
        self.insert(key, value);
        true
    }
}
