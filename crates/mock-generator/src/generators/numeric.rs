//! Numeric and boolean value generators.

use crate::generators::{choose, timestamp};
use crate::random::RandomSource;
use mock_core::{Directive, DomainKind};

/// Generate a boolean: one of the literals, or a fair coin.
pub fn generate_bool(random: &mut RandomSource, directive: &Directive) -> bool {
    if let Some(b) = choose(random, directive).and_then(|v| v.as_bool()) {
        return b;
    }
    random.coin()
}

/// Generate a signed integer.
///
/// Literal alternatives win; otherwise `type(date)` yields the current time
/// in the unit named by the format; otherwise a uniform draw in
/// `[min, max)`. Collection lengths are sampled with this rule too.
pub fn generate_int(random: &mut RandomSource, directive: &Directive) -> i64 {
    if let Some(i) = choose(random, directive).and_then(|v| v.as_i64()) {
        return i;
    }
    if directive.domain == Some(DomainKind::Date) {
        return timestamp::timestamp_now(directive.format_text());
    }
    random.int_in(directive.min, directive.max)
}

/// Generate an unsigned integer uniformly in `[min, max)`.
///
/// The span is sampled without modulo bias. The parser rejects negative
/// bounds for unsigned targets; a hand-built directive with negative bounds
/// wraps into the top of the `u64` range.
pub fn generate_uint(random: &mut RandomSource, directive: &Directive) -> u64 {
    if let Some(u) = choose(random, directive).and_then(|v| v.as_u64()) {
        return u;
    }
    let min = directive.min as u64;
    if directive.max <= directive.min {
        return min;
    }
    let span = directive.max.wrapping_sub(directive.min) as u64;
    min.wrapping_add(random.below(span))
}

/// Generate a float as `unit * (max - min) + min`.
pub fn generate_float(random: &mut RandomSource, directive: &Directive) -> f64 {
    if let Some(f) = choose(random, directive).and_then(|v| v.as_f64()) {
        return f;
    }
    let (min, max) = (directive.min as f64, directive.max as f64);
    random.unit() * (max - min) + min
}

/// Generate a float for an `f32` target.
///
/// Same draw as [`generate_float`], narrowed so that rounding never lands on
/// the exclusive `max`.
pub fn generate_f32(random: &mut RandomSource, directive: &Directive) -> f32 {
    if directive.has_values() {
        return generate_float(random, directive) as f32;
    }
    narrow_below(generate_float(random, directive), directive.max)
}

/// Narrow `value` to `f32`, stepping down one ulp if rounding reached `max`.
fn narrow_below(value: f64, max: i64) -> f32 {
    let narrowed = value as f32;
    if value < max as f64 && f64::from(narrowed) >= max as f64 {
        return next_below(narrowed);
    }
    narrowed
}

/// Largest `f32` below `x`, for finite `x`.
fn next_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f32::from_bits(x.to_bits() + 1)
    } else {
        -f32::from_bits(1)
    }
}
