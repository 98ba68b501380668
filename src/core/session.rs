//! Per-invocation command session.
//!
//! [`CommandSession`] orchestrates the resolution pipeline once per run:
//! resolve the active entity type from configuration, build the indexed
//! collection from live repository state, and rewrite user-supplied index
//! tokens. The stages run strictly in order and pass their results as
//! values, so a session holds no mutable state of its own and any failure
//! before resolution aborts the run before the executor is ever invoked.

use crate::core::collection::EntityCollection;
use crate::core::entity::EntityType;
use crate::core::error::Result;
use crate::core::git::GitRepo;
use crate::core::index_type;
use crate::core::transform::transform_args;

/// Outcome of a fully prepared session, ready for the executor.
#[derive(Debug)]
pub struct PreparedInvocation {
    pub entity_type: EntityType,
    pub collection: EntityCollection,
    /// Resolved arguments, `None` when the invocation carried no arguments
    /// (resolution is skipped entirely, not run on an empty list).
    pub args: Option<Vec<String>>,
}

pub struct CommandSession<'r> {
    repo: &'r GitRepo,
}

impl<'r> CommandSession<'r> {
    pub fn new(repo: &'r GitRepo) -> Self {
        CommandSession { repo }
    }

    /// Run the session state machine to completion.
    ///
    /// Stages: resolve entity type (override wins over persisted config),
    /// build the collection for that type, then transform the raw
    /// arguments against it.
    pub fn prepare(
        &self,
        raw_args: &[String],
        override_type: Option<EntityType>,
    ) -> Result<PreparedInvocation> {
        let entity_type = match override_type {
            Some(entity_type) => entity_type,
            None => index_type::get_active_type(self.repo)?,
        };
        log::debug!("Session entity type: {entity_type}");

        let collection = self.build_collection(entity_type)?;
        log::debug!("Built collection with {} entities", collection.len());

        let args = if raw_args.is_empty() {
            None
        } else {
            Some(transform_args(raw_args, &collection))
        };

        Ok(PreparedInvocation {
            entity_type,
            collection,
            args,
        })
    }

    /// Build an indexed collection from live state for the given type.
    pub fn build_collection(&self, entity_type: EntityType) -> Result<EntityCollection> {
        match entity_type {
            EntityType::Branch => Ok(EntityCollection::from_branches(
                self.repo.list_branches()?,
            )),
            EntityType::Path => Ok(EntityCollection::from_files(self.repo.status_records()?)),
            EntityType::Tag => Ok(EntityCollection::from_tags(self.repo.tag_names()?)),
        }
    }

    /// Persist a new active index type and rebuild the collection so the
    /// new mode takes effect immediately.
    pub fn set_active_type(&self, entity_type: EntityType) -> Result<EntityCollection> {
        index_type::set_active_type(self.repo, entity_type)?;
        self.build_collection(entity_type)
    }
}
