//! Entity collection builder and rendering.
//!
//! [`EntityCollection`] turns raw repository records into an ordered list of
//! indexed entities. Indices are dense (1..N), assigned by enumeration order
//! over the source listing, and only valid for the lifetime of the
//! invocation that built the collection. The list is immutable after
//! construction; rebuilding means full reconstruction from live state.

use crate::core::entity::{
    BranchEntity, EntityType, FileArea, FileEntity, IndexedEntity, TagEntity,
};
use crate::core::git::{BranchRecord, FileStatusRecord};
use colored::*;

/// An ordered, immutable sequence of indexed entities of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCollection {
    entity_type: EntityType,
    list: Vec<IndexedEntity>,
}

impl EntityCollection {
    /// Build a branch collection, preserving source enumeration order.
    pub fn from_branches(records: Vec<BranchRecord>) -> Self {
        let list = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                IndexedEntity::Branch(BranchEntity {
                    entity_index: i + 1,
                    name: record.name,
                    current: record.current,
                    commit: record.commit,
                    label: record.label,
                })
            })
            .collect();

        EntityCollection {
            entity_type: EntityType::Branch,
            list,
        }
    }

    /// Build a file collection, classifying each record's area from its
    /// status column pair.
    pub fn from_files(records: Vec<FileStatusRecord>) -> Self {
        let list = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let area = FileArea::classify(record.index_status, record.worktree_status);
                IndexedEntity::File(FileEntity {
                    entity_index: i + 1,
                    name: record.path,
                    status: format!("{}{}", record.index_status, record.worktree_status),
                    area,
                })
            })
            .collect();

        EntityCollection {
            entity_type: EntityType::Path,
            list,
        }
    }

    /// Build a tag collection from tag names in enumeration order.
    pub fn from_tags(names: Vec<String>) -> Self {
        let list = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                IndexedEntity::Tag(TagEntity {
                    entity_index: i + 1,
                    name,
                })
            })
            .collect();

        EntityCollection {
            entity_type: EntityType::Tag,
            list,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn list(&self) -> &[IndexedEntity] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Name of the entity at a 1-based index, if in range.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.list.get(index - 1).map(|entity| entity.name())
    }

    /// Render either the full list or a provided subset.
    ///
    /// The current branch gets a distinct marker; remote-tracking branches
    /// are colored differently from local ones. An empty list prints
    /// nothing.
    pub fn print_entities(&self, subset: Option<&[IndexedEntity]>) {
        let entities = subset.unwrap_or(&self.list);
        for entity in entities {
            match entity {
                IndexedEntity::Branch(branch) => print_branch_line(branch),
                IndexedEntity::File(file) => print_file_line(file),
                IndexedEntity::Tag(tag) => print_tag_line(tag),
            }
        }
    }
}

fn print_branch_line(branch: &BranchEntity) {
    let marker = if branch.current {
        "➤ ".green().to_string()
    } else {
        "  ".to_string()
    };
    let index = format!("[{}]", branch.entity_index).white();

    let name = if branch.name.starts_with("remotes/") {
        branch.name.red()
    } else if branch.current {
        branch.name.green()
    } else {
        branch.name.bright_black()
    };

    println!("{marker} {index} {name}");
}

fn print_file_line(file: &FileEntity) {
    let index = format!("[{}]", file.entity_index).cyan().bold();
    let status = paint_area(file.area, &file.status);
    let name = paint_area(file.area, &file.name);
    println!("{index} {status}  {name}");
}

fn print_tag_line(tag: &TagEntity) {
    let index = format!("[{}]", tag.entity_index).white();
    println!("  {} {}", index, tag.name.blue());
}

fn paint_area(area: FileArea, text: &str) -> ColoredString {
    match area {
        FileArea::Untracked => text.cyan(),
        FileArea::Stage => text.green(),
        FileArea::WorkTree => text.yellow(),
        FileArea::Unmerged => text.red().bold(),
    }
}
