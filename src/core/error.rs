//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitShorthandError`] which covers every failure mode
//! of the shorthand layer. It uses `thiserror` for ergonomic error
//! definitions and provides a small set of named constructors for the
//! variants that carry sources.
//!
//! # Error Categories
//! - **Repository errors**: not a git repository, bare repository, state
//!   enumeration failures
//! - **Configuration errors**: unreadable/unwritable repository config,
//!   unparseable persisted index type
//! - **Dispatch errors**: unknown shorthand alias
//!
//! Index tokens that are out of range or malformed are deliberately NOT
//! errors: the argument transformer passes them through unchanged so the
//! underlying git command reports the problem with full context.

use thiserror::Error;

/// Domain-specific error types for git-shorthand
#[derive(Error, Debug)]
pub enum GitShorthandError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    NoWorkdir,

    #[error("Failed to read repository state: {source}")]
    RepositoryState { source: git2::Error },

    #[error("Invalid UTF-8 name in repository")]
    InvalidUtf8Name,

    // Configuration errors
    #[error("Cannot access repository configuration: {source}")]
    ConfigAccess { source: git2::Error },

    #[error("Invalid index type '{value}'. Expected one of: branch, path, tag")]
    InvalidIndexType { value: String },

    // Dispatch errors
    #[error("Unknown shorthand '{alias}'. Run 'gsh --help' for usage")]
    UnknownAlias { alias: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using GitShorthandError
pub type Result<T> = std::result::Result<T, GitShorthandError>;

impl GitShorthandError {
    /// Create a repository state error from a git2 failure
    pub fn repository_state(source: git2::Error) -> Self {
        Self::RepositoryState { source }
    }

    /// Create a config access error from a git2 failure
    pub fn config_access(source: git2::Error) -> Self {
        Self::ConfigAccess { source }
    }

    /// Create an invalid index type error
    pub fn invalid_index_type(value: impl Into<String>) -> Self {
        Self::InvalidIndexType {
            value: value.into(),
        }
    }

    /// Create an unknown alias error
    pub fn unknown_alias(alias: impl Into<String>) -> Self {
        Self::UnknownAlias {
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitShorthandError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_invalid_index_type_error() {
        let err = GitShorthandError::invalid_index_type("bogus");
        assert_eq!(
            err.to_string(),
            "Invalid index type 'bogus'. Expected one of: branch, path, tag"
        );
    }

    #[test]
    fn test_unknown_alias_error() {
        let err = GitShorthandError::unknown_alias("xyz");
        assert!(err.to_string().contains("Unknown shorthand 'xyz'"));
    }

    #[test]
    fn test_config_access_error() {
        let inner = git2::Error::from_str("locked");
        let err = GitShorthandError::config_access(inner);
        assert!(err
            .to_string()
            .contains("Cannot access repository configuration"));
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_repository_state_error() {
        let inner = git2::Error::from_str("corrupt odb");
        let err = GitShorthandError::repository_state(inner);
        assert!(err.to_string().contains("Failed to read repository state"));
    }
}
