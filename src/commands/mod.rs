//! Command implementations

mod init;
mod preview;
mod run;

pub use init::init;
pub use preview::preview;
pub use run::{batch, project, run, tasks};

use labelrig::config::Config;
use labelrig::output::OutputMode;

/// Everything a command needs from the command line and config
#[derive(Debug)]
pub struct Context {
    /// Effective configuration
    pub config: Config,
    /// `--api-key`, if given
    pub api_key: Option<String>,
    /// `--base-url`, if given
    pub base_url: Option<String>,
    /// Output mode
    pub mode: OutputMode,
}
