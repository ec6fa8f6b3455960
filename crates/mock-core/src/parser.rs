//! Directive text parser.
//!
//! Directive text is scanned for `name(arguments)` calls where `name` is
//! one of `range`, `type`, `value`, `mock`, `valid`, `key`, `elem`,
//! `format` or `tag`, and `arguments` runs up to the first `)`. Anything
//! between calls is ignored, so directives can be mixed with prose:
//!
//! ```text
//! range(1, 5) elem(word12)   -- a list of 1..5 elements using tag word12
//! type(date) format(ms)      -- a millisecond timestamp
//! value(red, green, blue)    -- one of three strings
//! ```
//!
//! Arguments never contain `)`, so nested directives for `key`/`elem`
//! are usually given as tag-dictionary names.

use crate::directive::{Directive, DomainKind, Literal};
use crate::error::DirectiveError;
use crate::kind::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;

static CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(range|type|value|mock|valid|key|elem|format|tag)\((.+?)\)")
        .expect("directive regex")
});

/// Parse directive text for a target of the given kind.
///
/// On failure the partially built directive is discarded; callers fall
/// back to [`Directive::default`].
pub fn parse_directive(kind: FieldKind, text: &str) -> Result<Directive, DirectiveError> {
    let mut directive = Directive::default();
    if text.is_empty() {
        return Ok(directive);
    }

    for caps in CALL_RE.captures_iter(text) {
        let name = &caps[1];
        let args = &caps[2];
        match name {
            "range" => parse_range(&mut directive, args)?,
            "type" => directive.domain = Some(parse_type(kind, args)?),
            "value" => directive.values = parse_values(kind, args)?,
            "mock" => directive.gen_func = Some(args.to_string()),
            "valid" => directive.valid_func = Some(args.to_string()),
            "key" => directive.key = Some(args.to_string()),
            "elem" => directive.elem = Some(args.to_string()),
            "format" => directive.format = Some(args.to_string()),
            "tag" => directive.tag = Some(args.to_string()),
            _ => {}
        }
    }

    validate(kind, &directive)?;
    Ok(directive)
}

fn parse_range(directive: &mut Directive, args: &str) -> Result<(), DirectiveError> {
    let parts: Vec<&str> = args.split(',').collect();
    match parts.as_slice() {
        [single] => {
            let n = parse_bound(single)?;
            // A single bound below the current minimum collapses to [n, 1).
            if n < directive.min {
                directive.min = n;
                directive.max = 1;
            } else {
                directive.max = n;
            }
        }
        [lo, hi] => {
            let min = parse_bound(lo)?;
            let max = parse_bound(hi)?;
            if min > max {
                return Err(DirectiveError::conflict(
                    "min",
                    min,
                    "max",
                    max,
                    "range min must not exceed max",
                ));
            }
            directive.min = min;
            directive.max = max;
        }
        _ => {
            return Err(DirectiveError::param(
                "range",
                "one or two numbers",
                parts.len(),
            ))
        }
    }
    Ok(())
}

fn parse_bound(raw: &str) -> Result<i64, DirectiveError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DirectiveError::param("range", "number", raw))
}

fn parse_type(kind: FieldKind, args: &str) -> Result<DomainKind, DirectiveError> {
    let domain: DomainKind = args
        .parse()
        .map_err(|_| DirectiveError::param("type", DomainKind::expected_list(), args))?;

    match domain {
        DomainKind::Date if kind != FieldKind::I64 && kind != FieldKind::String => {
            Err(DirectiveError::conflict(
                "fieldType",
                kind,
                "type",
                domain,
                "date needs field type i64 or String",
            ))
        }
        DomainKind::Date => Ok(domain),
        _ if kind != FieldKind::String => Err(DirectiveError::conflict(
            "fieldType",
            kind,
            "type",
            domain,
            format!("{domain} needs field type String"),
        )),
        _ => Ok(domain),
    }
}

fn parse_values(kind: FieldKind, args: &str) -> Result<Vec<Literal>, DirectiveError> {
    let raw: Vec<&str> = args.split(',').map(str::trim).collect();
    let mut values = Vec::with_capacity(raw.len());

    for v in raw {
        let literal = if kind == FieldKind::String {
            Literal::Str(v.to_string())
        } else if kind.is_signed() {
            Literal::Int(parse_int_literal(kind, v)?)
        } else if kind.is_unsigned() {
            Literal::Uint(parse_uint_literal(kind, v)?)
        } else if kind.is_float() {
            let f = v
                .parse::<f64>()
                .map_err(|e| value_conflict(kind, v, e.to_string()))?;
            Literal::Float(f)
        } else if kind == FieldKind::Bool {
            match v {
                "true" => Literal::Bool(true),
                "false" => Literal::Bool(false),
                _ => return Err(value_conflict(kind, v, "expected true or false")),
            }
        } else {
            // Containers and aggregates take no literal alternatives.
            continue;
        };
        values.push(literal);
    }

    Ok(values)
}

fn parse_int_literal(kind: FieldKind, v: &str) -> Result<i64, DirectiveError> {
    let n = v
        .parse::<i64>()
        .map_err(|e| value_conflict(kind, v, e.to_string()))?;
    check_width(kind, v, n as i128)?;
    Ok(n)
}

fn parse_uint_literal(kind: FieldKind, v: &str) -> Result<u64, DirectiveError> {
    let n = v
        .parse::<u64>()
        .map_err(|e| value_conflict(kind, v, e.to_string()))?;
    check_width(kind, v, n as i128)?;
    Ok(n)
}

fn check_width(kind: FieldKind, v: &str, n: i128) -> Result<(), DirectiveError> {
    match kind.int_bounds() {
        Some((lo, hi)) if n < lo || n > hi => {
            Err(value_conflict(kind, v, format!("out of range for {kind}")))
        }
        _ => Ok(()),
    }
}

fn value_conflict(kind: FieldKind, v: &str, detail: impl Into<String>) -> DirectiveError {
    DirectiveError::conflict("fieldType", kind, "value", v, detail)
}

fn validate(kind: FieldKind, directive: &Directive) -> Result<(), DirectiveError> {
    if directive.min < 0 {
        if let Some(domain) = directive.domain.filter(|d| d.is_textual()) {
            return Err(DirectiveError::conflict(
                "type",
                domain,
                "min",
                directive.min,
                "word and sentence lengths must not be negative",
            ));
        }
        if kind.is_collection() {
            return Err(DirectiveError::conflict(
                "fieldType",
                kind,
                "min",
                directive.min,
                "sequence/array/map lengths must not be negative",
            ));
        }
    }
    if directive.min > directive.max {
        return Err(DirectiveError::conflict(
            "min",
            directive.min,
            "max",
            directive.max,
            "range min must not exceed max",
        ));
    }
    check_range_width(kind, directive)
}

/// Every value a range can produce must fit the target integer. An empty
/// range produces `min`.
fn check_range_width(kind: FieldKind, directive: &Directive) -> Result<(), DirectiveError> {
    let Some((lo, hi)) = kind.int_bounds() else {
        return Ok(());
    };
    let (min, max) = (directive.min as i128, directive.max as i128);
    let top = if max > min { max - 1 } else { min };
    if min < lo || top > hi {
        return Err(DirectiveError::conflict(
            "fieldType",
            kind,
            "range",
            format!("{}, {}", directive.min, directive.max),
            format!("out of range for {kind}"),
        ));
    }
    Ok(())
}
