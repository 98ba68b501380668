//! Git Shorthand - an interactive command-line shorthand layer over git
//! with index-based entity references.
//!
//! Users type abbreviated commands (`gsh co 2`, `gsh a 1`) and may refer to
//! branches, modified files or tags by the small integer index shown in the
//! corresponding listing. The core of the crate is the indexed-entity
//! resolution pipeline: enumerate the relevant entities, assign them dense
//! per-invocation indices, and rewrite index tokens in the argument list
//! back into real entity names before git runs.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Repository state access and entity enumeration
//! - Indexed entity collections and their rendering
//! - Active index type configuration
//! - Argument transformation and session orchestration
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    print_error,
    print_info,
    print_section_header,
    // Output formatting
    print_success,

    transform_args,

    BranchEntity,
    // Repository state
    BranchRecord,

    // Session orchestration
    CommandSession,

    // Entity collections
    EntityCollection,
    // Data model
    EntityType,
    FileArea,
    FileEntity,
    FileStatusRecord,

    // Error handling
    GitShorthandError,
    GitRepo,

    IndexedEntity,
    PreparedInvocation,
    Result,
    TagEntity,
};
