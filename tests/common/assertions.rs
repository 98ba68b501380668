//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
        .or(predicates::str::contains("NotInGitRepo"))
}

/// Creates a predicate that checks for an indexed entity line
pub fn has_entity_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for unknown alias errors
pub fn unknown_alias(alias: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Unknown shorthand '{}'", alias))
}
