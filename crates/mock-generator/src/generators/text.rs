//! String value generators.

use crate::generators::choose;
use crate::generators::domain::DomainGenerator;
use crate::random::RandomSource;
use mock_core::{Directive, DomainKind};

/// Alphabet for strings without a domain kind.
pub const CHARS: &[u8] = br#"0123456789abcdefghijklmnopqrstuvwxyz!@#$%^&*(){}[]<>?,./\|:";'~"#;

/// Generate a string.
///
/// Literal alternatives win; otherwise a domain kind is rendered by
/// `domain`; otherwise `[min, max)` characters are drawn from [`CHARS`].
pub fn generate_string(
    random: &mut RandomSource,
    directive: &Directive,
    domain: &dyn DomainGenerator,
) -> String {
    if let Some(s) = choose(random, directive).and_then(|v| v.as_str()) {
        return s.to_string();
    }
    match directive.domain {
        Some(kind) => render_domain(random, directive, kind, domain),
        None => generate_chars(random, directive.min, directive.max),
    }
}

fn render_domain(
    random: &mut RandomSource,
    directive: &Directive,
    kind: DomainKind,
    domain: &dyn DomainGenerator,
) -> String {
    match kind {
        DomainKind::Date => domain.date(directive.format_text()),
        DomainKind::Email => domain.email(random),
        DomainKind::Phone => domain.phone(random),
        DomainKind::Url => domain.url(random),
        DomainKind::Ipv4 => domain.ipv4(random),
        DomainKind::Domain => domain.domain(random),
        DomainKind::Word => domain.word(random, directive.min, directive.max),
        DomainKind::Sentence => domain.sentence(random, directive.min, directive.max),
    }
}

/// Random string over [`CHARS`] with a length in `[min, max)`.
pub fn generate_chars(random: &mut RandomSource, min: i64, max: i64) -> String {
    let len = usize::try_from(random.int_in(min, max)).unwrap_or(0);
    (0..len)
        .map(|_| CHARS[random.index(CHARS.len())] as char)
        .collect()
}
