//! Subcommand implementations, one file per command.

mod clear;
mod export;
mod import;
mod pack;
mod serve;
mod status;
mod types;

pub use clear::run_clear;
pub use export::{run_export, write_archive};
pub use import::run_import;
pub use pack::run_pack;
pub use serve::run_serve;
pub use status::run_status;
pub use types::run_types;
