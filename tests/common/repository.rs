//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states and configurations.

#![allow(dead_code)]

use git_shorthand::core::error::{GitShorthandError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitShorthandError::Io)?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Initializes the repository with a deterministic default branch name
/// ("main") and basic user configuration to avoid prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitShorthandError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(GitShorthandError::Io)?;
    Ok(())
}

/// Adds a file to the git index ("." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

/// Creates a branch without switching to it
pub fn git_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["branch", name])
}

/// Creates a lightweight tag at HEAD
pub fn git_tag(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["tag", name])
}

/// Reads the branch HEAD currently points at
pub fn current_branch(repo_path: &Path) -> Result<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(repo_path)
        .output()
        .map_err(GitShorthandError::Io)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Creates multiple test files with sequential content
pub fn create_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("content{}\nline 2\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Opens a GitRepo handle for the test repository
pub fn open_repo(test_repo: &TestRepo) -> Result<git_shorthand::core::git::GitRepo> {
    git_shorthand::core::git::GitRepo::open(&test_repo.path)
}
