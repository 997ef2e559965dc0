//! Library side of the `modelscape` binary: local sources, catalog queries,
//! and the subcommand bodies, kept here so they can be tested without a
//! process.

pub mod commands;
pub mod query;
pub mod sources;

pub use query::{Query, SortOrder};
pub use sources::{SourceError, load_entities, load_glossary, parse_entities, parse_glossary};
