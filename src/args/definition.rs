//! Command-line argument definition.

use clap::Parser;

use crate::app::RunOptions;
use crate::config::Settings;

/// postboard - browse, create, edit and delete posts of a JSON REST service
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "postboard")]
#[command(version)]
#[command(about = "Browse, create, edit and delete posts of a JSON REST service", long_about = None)]
pub struct Args {
    /// Root URL of the posts service (overrides `base_url` in settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with the list filtered to this user id
    #[arg(short, long)]
    pub user: Option<u64>,

    /// Run without a terminal: load the posts once, log the result and exit
    #[arg(long)]
    pub headless: bool,
}

/// What: Merge parsed arguments into the file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Values loaded from `settings.conf`.
///
/// Output:
/// - Options for [`crate::app::run`].
///
/// Details:
/// - A `--base-url` without an http(s) scheme is ignored with a warning.
#[must_use]
pub fn process_args(args: &Args, mut settings: Settings) -> RunOptions {
    if let Some(url) = &args.base_url {
        if url.starts_with("http://") || url.starts_with("https://") {
            settings.base_url = url.trim_end_matches('/').to_string();
        } else {
            tracing::warn!(value = %url, "--base-url must start with http:// or https://; ignored");
        }
    }
    RunOptions {
        settings,
        initial_user: args.user,
        headless: args.headless,
    }
}
