//! Section markers and line classification
//!
//! Classification is purely lexical and looks at one line at a time:
//!
//! 1. a line starting with `GO:` is an identifier line
//! 2. a line containing `:` that matches the marker pattern is a section marker
//! 3. anything else is noise
//!
//! Markers are `SECTION:` followed by a name, optionally preceded by `#`, in
//! any letter case.

use crate::identifier::{leading_identifier, starts_with_identifier};
use once_cell::sync::Lazy;
use regex::Regex;

/// Name of the section holding GO IDs that were not placed in any other group.
pub const DEFAULT_SECTION: &str = "Misc.";

static SECTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?\s*SECTION:\s*(\S(?:.*\S)?)\s*$").unwrap());

/// What a single line of a GO list file contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The first ten characters of an identifier line
    Identifier(&'a str),
    /// The trimmed name of a section marker
    Marker(&'a str),
    Noise,
}

/// The section name declared by `line`, if it is a marker.
pub fn section_name(line: &str) -> Option<&str> {
    if !line.contains(':') {
        return None;
    }
    SECTION_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}

/// Classifies one line. With `identifiers_only` markers are treated as noise.
pub fn classify(line: &str, identifiers_only: bool) -> LineKind<'_> {
    if starts_with_identifier(line) {
        return LineKind::Identifier(leading_identifier(line));
    }
    if identifiers_only {
        return LineKind::Noise;
    }
    match section_name(line) {
        Some(name) => LineKind::Marker(name),
        None => LineKind::Noise,
    }
}
