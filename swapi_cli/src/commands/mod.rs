//! CLI subcommand implementations.

pub mod categories;
pub mod fetch;
pub mod save;
