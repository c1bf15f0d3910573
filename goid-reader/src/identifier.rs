//! GO identifier shape
//!
//! A GO ID is exactly ten characters: the `GO:` prefix and seven digits. Lines
//! are only checked for the prefix while reading; the full shape is checked
//! once a group of IDs is finished, through an [`IdentifierValidator`].

use crate::error::{ReadError, Result};

/// Prefix shared by every GO ID.
pub const GO_PREFIX: &str = "GO:";

/// Number of characters in a GO ID, prefix included.
pub const GO_ID_LEN: usize = 10;

/// True when the line starts with the GO ID prefix.
pub fn starts_with_identifier(line: &str) -> bool {
    line.starts_with(GO_PREFIX)
}

/// The first [`GO_ID_LEN`] characters of a line, or the whole line when shorter.
pub fn leading_identifier(line: &str) -> &str {
    match line.char_indices().nth(GO_ID_LEN) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

/// True when `id` is `GO:` followed by exactly seven ASCII digits.
pub fn is_valid_identifier(id: &str) -> bool {
    id.len() == GO_ID_LEN
        && id.starts_with(GO_PREFIX)
        && id[GO_PREFIX.len()..].bytes().all(|b| b.is_ascii_digit())
}

/// Checks a finished group of identifiers.
///
/// `context` names the group (`read_goids` for a flat list, or
/// `GO IDs IN SECTION(<name>)`) and is carried into the error.
pub trait IdentifierValidator {
    fn validate(&self, ids: &[String], context: &str) -> Result<()>;
}

/// Rejects the first identifier that is not a well-formed GO ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictValidator;

impl IdentifierValidator for StrictValidator {
    fn validate(&self, ids: &[String], context: &str) -> Result<()> {
        match ids.iter().find(|id| !is_valid_identifier(id)) {
            Some(bad) => Err(ReadError::MalformedIdentifier {
                id: bad.clone(),
                context: context.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl<F> IdentifierValidator for F
where
    F: Fn(&[String], &str) -> Result<()>,
{
    fn validate(&self, ids: &[String], context: &str) -> Result<()> {
        self(ids, context)
    }
}
