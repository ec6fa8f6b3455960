//! Directive resolution against the session dictionaries.

use mock_core::{parse_directive, Directive, DirectiveError, FieldKind};
use std::collections::HashMap;
use tracing::trace;

/// A resolved directive and the errors met while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub directive: Directive,
    pub errors: Vec<DirectiveError>,
}

/// Borrowed view over the tag and format dictionaries.
///
/// Dictionaries are read on every call, so a session that swaps them sees
/// the new entries on its next resolution.
pub struct Resolver<'a> {
    tags: &'a HashMap<String, String>,
    formats: &'a HashMap<String, String>,
}

impl<'a> Resolver<'a> {
    pub fn new(tags: &'a HashMap<String, String>, formats: &'a HashMap<String, String>) -> Self {
        Self { tags, formats }
    }

    /// Resolve directive `text` for a target of `kind`.
    ///
    /// A parse failure is recorded and the default directive is used in its
    /// place. A `tag(name)` found in the tag dictionary replaces the whole
    /// directive with the entry's text. `key` and `elem` naming a tag entry
    /// become that entry's text, and `format` naming a format entry becomes
    /// that entry's text.
    pub fn resolve(&self, text: &str, kind: FieldKind) -> Resolved {
        let mut errors = Vec::new();
        let mut chain = Vec::new();
        let directive = self.resolve_chain(text, kind, &mut chain, &mut errors);
        Resolved { directive, errors }
    }

    fn resolve_chain(
        &self,
        text: &str,
        kind: FieldKind,
        chain: &mut Vec<String>,
        errors: &mut Vec<DirectiveError>,
    ) -> Directive {
        let mut directive = parse_directive(kind, text).unwrap_or_else(|err| {
            errors.push(err);
            Directive::default()
        });

        if let Some(name) = directive.tag.as_deref() {
            if let Some(entry) = self.tags.get(name) {
                if chain.iter().any(|seen| seen == name) {
                    errors.push(DirectiveError::conflict(
                        "tag",
                        name,
                        "tag",
                        chain.join(" -> "),
                        "cyclic tag reference",
                    ));
                } else {
                    trace!(tag = name, directive = %entry, "Substituting tag");
                    chain.push(name.to_string());
                    return self.resolve_chain(entry, kind, chain, errors);
                }
            }
        }

        if let Some(entry) = self.tag_entry(directive.key.as_deref()) {
            trace!(key = %entry, "Substituting key directive from tag");
            directive.key = Some(entry.clone());
        }
        if let Some(entry) = self.tag_entry(directive.elem.as_deref()) {
            trace!(elem = %entry, "Substituting elem directive from tag");
            directive.elem = Some(entry.clone());
        }
        if let Some(entry) = self.format_entry(directive.format.as_deref()) {
            trace!(format = %entry, "Substituting format");
            directive.format = Some(entry.clone());
        }

        directive
    }

    fn tag_entry(&self, name: Option<&str>) -> Option<&'a String> {
        self.tags.get(name?)
    }

    fn format_entry(&self, name: Option<&str>) -> Option<&'a String> {
        self.formats.get(name?)
    }
}
