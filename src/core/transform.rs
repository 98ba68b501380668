//! Index argument transformation.
//!
//! [`transform_args`] rewrites a raw argument list, replacing every token
//! that is a valid index reference with the corresponding entity's name and
//! leaving all other tokens untouched. The rewrite is element-wise: output
//! preserves input order and length exactly.
//!
//! A token is an index reference iff it consists solely of ASCII digits and
//! its value falls within `[1, len]` of the collection. Out-of-range
//! indices pass through unchanged so the downstream git command reports the
//! problem itself instead of the resolver masking a typo. Range and list
//! syntaxes are not accepted: expanding one token into several names would
//! break the length-preserving contract.

use crate::core::collection::EntityCollection;

/// Rewrite index references in `raw` against `collection`.
pub fn transform_args(raw: &[String], collection: &EntityCollection) -> Vec<String> {
    raw.iter()
        .map(|token| match parse_index_token(token) {
            Some(index) => match collection.name_at(index) {
                Some(name) => name.to_string(),
                None => token.clone(),
            },
            None => token.clone(),
        })
        .collect()
}

/// Parse a token as a bare positive integer index, or reject it.
fn parse_index_token(token: &str) -> Option<usize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse::<usize>().ok().filter(|&n| n >= 1)
}
