//! The resolved per-field generation contract.
//!
//! A [`Directive`] is what the parser produces from directive text such as
//! `range(1, 5) elem(word12)`. The population engine reads it to decide
//! bounds, literal alternatives, domain rendering and nested directives.
//!
//! Arguments end at the first `)`, so nested directives are referenced by
//! tag name: `elem(word12)` picks up the tag entry `word12`, which may hold
//! `type(word) range(12, 12)`.

use std::fmt;
use std::str::FromStr;

/// Default lower bound (inclusive).
pub const DEFAULT_MIN: i64 = 1;

/// Default upper bound (exclusive).
pub const DEFAULT_MAX: i64 = 10;

/// Directive text that excludes an aggregate member from population.
pub const EXCLUDE_MARKER: &str = "-";

/// Semantic string category rendered by a domain generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    Email,
    Date,
    Phone,
    Url,
    Ipv4,
    Domain,
    Word,
    Sentence,
}

impl DomainKind {
    /// Every recognized domain kind, in the order listed in error messages.
    pub const ALL: [DomainKind; 8] = [
        DomainKind::Email,
        DomainKind::Date,
        DomainKind::Phone,
        DomainKind::Url,
        DomainKind::Ipv4,
        DomainKind::Domain,
        DomainKind::Word,
        DomainKind::Sentence,
    ];

    /// Lowercase name as written in `type(...)`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Date => "date",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Ipv4 => "ipv4",
            Self::Domain => "domain",
            Self::Word => "word",
            Self::Sentence => "sentence",
        }
    }

    /// Slash-separated list of every kind name.
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether `min`/`max` bound a word count or word length for this kind.
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Word | Self::Sentence)
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

/// A literal alternative from `value(...)`, typed to the target kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
}

impl Literal {
    /// Try to get this literal as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this literal as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this literal as a u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get this literal as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this literal as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Resolved generation contract for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Domain kind from `type(...)`
    pub domain: Option<DomainKind>,

    /// Literal alternatives from `value(...)`; take priority over ranges
    pub values: Vec<Literal>,

    /// Lower bound (inclusive)
    pub min: i64,

    /// Upper bound (exclusive)
    pub max: i64,

    /// Directive text for map keys
    pub key: Option<String>,

    /// Directive text for collection elements and map values
    pub elem: Option<String>,

    /// Format text or format-dictionary name
    pub format: Option<String>,

    /// Tag-dictionary name replacing this directive on resolution
    pub tag: Option<String>,

    /// Custom generator function name
    pub gen_func: Option<String>,

    /// Custom validator function name
    pub valid_func: Option<String>,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            domain: None,
            values: Vec::new(),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            key: None,
            elem: None,
            format: None,
            tag: None,
            gen_func: None,
            valid_func: None,
        }
    }
}

impl Directive {
    /// Whether `value(...)` supplied any alternatives.
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// Nested element directive text, empty when unset.
    pub fn elem_text(&self) -> &str {
        self.elem.as_deref().unwrap_or("")
    }

    /// Format text, empty when unset.
    pub fn format_text(&self) -> &str {
        self.format.as_deref().unwrap_or("")
    }
}
