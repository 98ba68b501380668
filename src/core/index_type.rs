//! Active index type resolution against repository-local configuration.
//!
//! The entity category eligible for index-based reference (branch, path or
//! tag) is persisted under a single git config key scoped to the repository.
//! An absent key resolves to [`EntityType::Branch`]; an unreadable or
//! unwritable config store is fatal, since guessing the mode could resolve
//! an index against the wrong entity type.

use crate::core::entity::EntityType;
use crate::core::error::{GitShorthandError, Result};
use crate::core::git::GitRepo;

/// Repository-local config key holding the active index type.
pub const INDEX_TYPE_KEY: &str = "shorthand.indextype";

/// Read the persisted active index type, defaulting to branch when unset.
pub fn get_active_type(repo: &GitRepo) -> Result<EntityType> {
    let config = repo.config()?;
    match config.get_string(INDEX_TYPE_KEY) {
        Ok(value) => {
            log::debug!("Active index type from config: {value}");
            EntityType::parse(value.trim())
        }
        Err(e) if e.code() == git2::ErrorCode::NotFound => {
            log::debug!("No persisted index type, defaulting to branch");
            Ok(EntityType::Branch)
        }
        Err(e) => Err(GitShorthandError::config_access(e)),
    }
}

/// Persist a new active index type.
///
/// Callers that hold a session should go through
/// [`CommandSession::set_active_type`](crate::core::session::CommandSession::set_active_type),
/// which also rebuilds the active collection.
pub fn set_active_type(repo: &GitRepo, entity_type: EntityType) -> Result<()> {
    let mut config = repo.config()?;
    config
        .set_str(INDEX_TYPE_KEY, entity_type.as_str())
        .map_err(GitShorthandError::config_access)?;
    log::debug!("Persisted active index type: {entity_type}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> Result<(TempDir, GitRepo)> {
        let temp_dir = TempDir::new().map_err(GitShorthandError::Io)?;
        std::process::Command::new("git")
            .args(["init"])
            .current_dir(temp_dir.path())
            .output()
            .map_err(GitShorthandError::Io)?;
        let repo = GitRepo::open(temp_dir.path())?;
        Ok((temp_dir, repo))
    }

    #[test]
    fn test_get_active_type_defaults_to_branch() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        assert_eq!(get_active_type(&repo)?, EntityType::Branch);
        Ok(())
    }

    #[test]
    fn test_set_then_get_round_trip() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;

        set_active_type(&repo, EntityType::Path)?;
        assert_eq!(get_active_type(&repo)?, EntityType::Path);

        set_active_type(&repo, EntityType::Tag)?;
        assert_eq!(get_active_type(&repo)?, EntityType::Tag);
        Ok(())
    }

    #[test]
    fn test_persisted_value_survives_fresh_handle() -> Result<()> {
        let (temp_dir, repo) = setup_test_repo()?;
        set_active_type(&repo, EntityType::Path)?;

        let fresh = GitRepo::open(temp_dir.path())?;
        assert_eq!(get_active_type(&fresh)?, EntityType::Path);
        Ok(())
    }

    #[test]
    fn test_corrupt_persisted_value_is_an_error() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;

        std::process::Command::new("git")
            .args(["config", INDEX_TYPE_KEY, "bogus"])
            .current_dir(repo.workdir()?)
            .output()
            .map_err(GitShorthandError::Io)?;

        let result = get_active_type(&repo);
        assert!(matches!(
            result,
            Err(GitShorthandError::InvalidIndexType { .. })
        ));
        Ok(())
    }
}
