pub mod aliases;
pub mod run;

pub use aliases::{lookup, AliasSpec};
pub use run::{run_alias, run_index_type};
