//! Repository state provider built on `git2`.
//!
//! This module provides [`GitRepo`], the single gateway to live repository
//! state. It produces the raw records the collection builder consumes:
//! branch records with current/commit metadata, porcelain-style two-column
//! file-status records, and tag names, each in stable enumeration order.
//!
//! # Public API
//! - [`GitRepo`]: repository handle (discovery, state enumeration, config)
//! - [`BranchRecord`]: raw branch attributes before indexing
//! - [`FileStatusRecord`]: raw file status pair before indexing

use crate::core::error::{GitShorthandError, Result};
use git2::{Repository, StatusOptions};
use std::path::Path;

/// Raw branch attributes as enumerated from the repository.
///
/// Remote-tracking branches carry a `remotes/` name prefix so downstream
/// rendering can distinguish them from local branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub name: String,
    pub current: bool,
    pub commit: Option<String>,
    pub label: Option<String>,
}

/// Raw file status as a porcelain-style column pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatusRecord {
    pub path: String,
    pub index_status: char,
    pub worktree_status: char,
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| GitShorthandError::NotInGitRepo)?;
        Ok(GitRepo { repo })
    }

    /// Working directory of the repository. Bare repositories have none.
    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(GitShorthandError::NoWorkdir)
    }

    /// Repository-local configuration, writes landing in `.git/config`.
    pub fn config(&self) -> Result<git2::Config> {
        self.repo
            .config()
            .map_err(GitShorthandError::config_access)
    }

    /// Enumerate local and remote-tracking branches in iteration order.
    pub fn list_branches(&self) -> Result<Vec<BranchRecord>> {
        let branches = self
            .repo
            .branches(None)
            .map_err(GitShorthandError::repository_state)?;

        let mut records = Vec::new();
        for item in branches {
            let (branch, branch_type) = item.map_err(GitShorthandError::repository_state)?;
            let short = branch
                .name()
                .map_err(GitShorthandError::repository_state)?
                .ok_or(GitShorthandError::InvalidUtf8Name)?;

            let name = match branch_type {
                git2::BranchType::Local => short.to_string(),
                git2::BranchType::Remote => format!("remotes/{short}"),
            };

            let (commit, label) = match branch.get().peel_to_commit() {
                Ok(commit) => {
                    let short_hash = commit.id().to_string()[..7].to_string();
                    let summary = commit.summary().map(str::to_string);
                    (Some(short_hash), summary)
                }
                Err(_) => (None, None),
            };

            records.push(BranchRecord {
                current: branch.is_head(),
                name,
                commit,
                label,
            });
        }

        log::debug!("Enumerated {} branches", records.len());
        Ok(records)
    }

    /// Enumerate modified and untracked files as status column pairs.
    pub fn status_records(&self) -> Result<Vec<FileStatusRecord>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(GitShorthandError::repository_state)?;

        let mut records = Vec::new();
        for entry in statuses.iter() {
            let path = entry.path().ok_or(GitShorthandError::InvalidUtf8Name)?;
            let (index_status, worktree_status) = status_pair(entry.status());
            if index_status == ' ' && worktree_status == ' ' {
                continue;
            }
            records.push(FileStatusRecord {
                path: path.to_string(),
                index_status,
                worktree_status,
            });
        }

        log::debug!("Enumerated {} status records", records.len());
        Ok(records)
    }

    /// Enumerate tag names in iteration order.
    pub fn tag_names(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(GitShorthandError::repository_state)?;
        Ok(tags.iter().flatten().map(str::to_string).collect())
    }
}

/// Map git2 status flags to a porcelain-style (index, worktree) pair.
fn status_pair(flags: git2::Status) -> (char, char) {
    if flags.contains(git2::Status::CONFLICTED) {
        return ('U', 'U');
    }
    if flags.contains(git2::Status::WT_NEW) {
        return ('?', '?');
    }

    let index_status = if flags.contains(git2::Status::INDEX_NEW) {
        'A'
    } else if flags.contains(git2::Status::INDEX_MODIFIED) {
        'M'
    } else if flags.contains(git2::Status::INDEX_DELETED) {
        'D'
    } else if flags.contains(git2::Status::INDEX_RENAMED) {
        'R'
    } else if flags.contains(git2::Status::INDEX_TYPECHANGE) {
        'T'
    } else {
        ' '
    };

    let worktree_status = if flags.contains(git2::Status::WT_MODIFIED) {
        'M'
    } else if flags.contains(git2::Status::WT_DELETED) {
        'D'
    } else if flags.contains(git2::Status::WT_RENAMED) {
        'R'
    } else if flags.contains(git2::Status::WT_TYPECHANGE) {
        'T'
    } else {
        ' '
    };

    (index_status, worktree_status)
}
