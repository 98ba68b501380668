//! Shorthand dispatch.
//!
//! Connects the CLI surface to the core: looks up the alias, runs one
//! command session against the discovered repository, and hands the
//! resolved argument list to the executor. Listing aliases invoked without
//! arguments print the indexed collection instead of spawning git.

use crate::commands::aliases;
use crate::core::{
    entity::EntityType,
    error::{GitShorthandError, Result},
    exec,
    git::GitRepo,
    index_type,
    output::{print_info, print_success},
    session::CommandSession,
};
use std::env;

/// Run a shorthand alias with the user's raw arguments.
///
/// Returns the exit code to propagate to the shell.
pub fn run_alias(alias: &str, raw_args: &[String]) -> Result<i32> {
    let spec = aliases::lookup(alias).ok_or_else(|| GitShorthandError::unknown_alias(alias))?;

    let current_dir = env::current_dir()?;
    let repo = GitRepo::open(&current_dir)?;
    let session = CommandSession::new(&repo);
    let prepared = session.prepare(raw_args, spec.override_type)?;

    if spec.lists_collection && prepared.args.is_none() {
        prepared.collection.print_entities(None);
        return Ok(0);
    }

    let args = prepared.args.unwrap_or_default();
    let status = exec::run_git(repo.workdir()?, spec.base, spec.preset, &args)?;
    Ok(status.code().unwrap_or(1))
}

/// Show or set the persisted active index type.
///
/// With no value, prints the current type. With a value, persists it,
/// rebuilds the collection for the new mode and prints it.
pub fn run_index_type(value: Option<&str>) -> Result<i32> {
    let current_dir = env::current_dir()?;
    let repo = GitRepo::open(&current_dir)?;

    match value {
        None => {
            let entity_type = index_type::get_active_type(&repo)?;
            print_info(&format!("Active index type: {entity_type}"));
        }
        Some(value) => {
            let entity_type = EntityType::parse(value)?;
            let session = CommandSession::new(&repo);
            let collection = session.set_active_type(entity_type)?;
            print_success(&format!("Active index type set to '{entity_type}'"));
            collection.print_entities(None);
        }
    }

    Ok(0)
}
