//! Core functionality for the git-shorthand tool.
//!
//! This module provides the indexed-entity resolution pipeline and its
//! collaborators: repository state access, persisted index-type
//! configuration, argument transformation, session orchestration, command
//! execution and output formatting.

pub mod collection;
pub mod entity;
pub mod error;
pub mod exec;
pub mod git;
pub mod index_type;
pub mod output;
pub mod session;
pub mod transform;

// === Error handling ===
pub use error::{GitShorthandError, Result};

// === Data model ===
pub use entity::{BranchEntity, EntityType, FileArea, FileEntity, IndexedEntity, TagEntity};

// === Entity collections ===
pub use collection::EntityCollection;

// === Repository state ===
pub use git::{BranchRecord, FileStatusRecord, GitRepo};

// === Argument transformation ===
pub use transform::transform_args;

// === Session orchestration ===
pub use session::{CommandSession, PreparedInvocation};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
