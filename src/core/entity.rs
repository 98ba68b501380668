//! Core data model for indexed entities.
//!
//! An entity is a branch, file or tag known to the repository. During one
//! invocation every entity of the active type is annotated with a dense,
//! 1-based `entity_index` so the user can refer to it by number. Indices are
//! never persisted: each run rebuilds the collection from live state.
//!
//! Each variant is a closed record, so the fields available for an entity
//! are statically known from its type.

use crate::core::error::{GitShorthandError, Result};
use std::fmt;

/// Entity category eligible for index-based reference.
///
/// The string forms (`branch`, `path`, `tag`) double as the persisted
/// configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Branch,
    Path,
    Tag,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Branch => "branch",
            EntityType::Path => "path",
            EntityType::Tag => "tag",
        }
    }

    /// Parse a persisted or user-supplied type name.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "branch" => Ok(EntityType::Branch),
            "path" => Ok(EntityType::Path),
            "tag" => Ok(EntityType::Tag),
            other => Err(GitShorthandError::invalid_index_type(other)),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side of the repository a modified file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileArea {
    Untracked,
    Stage,
    WorkTree,
    Unmerged,
}

impl FileArea {
    /// Classify a file from its two-column porcelain status pair.
    ///
    /// Untracked markers win, then conflict markers in either column
    /// (including the both-deleted / both-added pairs), then a non-blank
    /// index column means Stage and anything else WorkTree.
    pub fn classify(index_status: char, worktree_status: char) -> FileArea {
        if index_status == '?' || worktree_status == '?' {
            return FileArea::Untracked;
        }
        if index_status == 'U'
            || worktree_status == 'U'
            || (index_status == 'D' && worktree_status == 'D')
            || (index_status == 'A' && worktree_status == 'A')
        {
            return FileArea::Unmerged;
        }
        if index_status != ' ' {
            FileArea::Stage
        } else {
            FileArea::WorkTree
        }
    }
}

/// An indexed branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntity {
    pub entity_index: usize,
    pub name: String,
    pub current: bool,
    /// Abbreviated head commit hash, absent on unborn branches.
    pub commit: Option<String>,
    /// Head commit summary line.
    pub label: Option<String>,
}

/// An indexed modified file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntity {
    pub entity_index: usize,
    pub name: String,
    /// Two-character porcelain status pair (index column + worktree column).
    pub status: String,
    pub area: FileArea,
}

/// An indexed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntity {
    pub entity_index: usize,
    pub name: String,
}

/// Closed set of indexed entity variants sharing name, type and index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexedEntity {
    Branch(BranchEntity),
    File(FileEntity),
    Tag(TagEntity),
}

impl IndexedEntity {
    pub fn name(&self) -> &str {
        match self {
            IndexedEntity::Branch(b) => &b.name,
            IndexedEntity::File(f) => &f.name,
            IndexedEntity::Tag(t) => &t.name,
        }
    }

    pub fn entity_index(&self) -> usize {
        match self {
            IndexedEntity::Branch(b) => b.entity_index,
            IndexedEntity::File(f) => f.entity_index,
            IndexedEntity::Tag(t) => t.entity_index,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            IndexedEntity::Branch(_) => EntityType::Branch,
            IndexedEntity::File(_) => EntityType::Path,
            IndexedEntity::Tag(_) => EntityType::Tag,
        }
    }
}
