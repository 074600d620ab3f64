//! CLI command handlers, one file per subcommand.

mod download;
mod format;

pub use download::run_download;
pub use format::run_format;
