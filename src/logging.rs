//! Tracing subscriber setup for the CLI

use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn level(self) -> Level {
        match self {
            Verbosity::Quiet => Level::WARN,
            Verbosity::Normal => Level::INFO,
            Verbosity::Verbose => Level::DEBUG,
        }
    }
}

/// Install the stderr fmt subscriber once; later calls are no-ops
pub fn init_logging(verbosity: Verbosity) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(verbosity.level())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
