//! Scalar value generators.
//!
//! This module turns a resolved [`Directive`] into a single scalar value
//! for the target's [`FieldKind`].

pub mod domain;
pub mod numeric;
pub mod text;
pub mod timestamp;

use crate::random::RandomSource;
use domain::DomainGenerator;
use mock_core::{Directive, FieldKind, Literal};

/// Generate a scalar for `kind`; `None` for non-scalar kinds.
pub fn generate_scalar(
    kind: FieldKind,
    directive: &Directive,
    random: &mut RandomSource,
    domain: &dyn DomainGenerator,
) -> Option<Literal> {
    let value = match kind {
        FieldKind::Bool => Literal::Bool(numeric::generate_bool(random, directive)),
        FieldKind::String => Literal::Str(text::generate_string(random, directive, domain)),
        k if k.is_signed() => Literal::Int(numeric::generate_int(random, directive)),
        k if k.is_unsigned() => Literal::Uint(numeric::generate_uint(random, directive)),
        FieldKind::F32 => Literal::Float(f64::from(numeric::generate_f32(random, directive))),
        k if k.is_float() => Literal::Float(numeric::generate_float(random, directive)),
        _ => return None,
    };
    Some(value)
}

/// Pick one of the directive's literal alternatives uniformly.
pub(crate) fn choose<'d>(random: &mut RandomSource, directive: &'d Directive) -> Option<&'d Literal> {
    if !directive.has_values() {
        return None;
    }
    directive.values.get(random.index(directive.values.len()))
}
