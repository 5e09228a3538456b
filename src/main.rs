//! postboard binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use postboard::args::{Args, determine_log_level, process_args};
use postboard::{app, config};

/// Log timestamps in local time, `YYYY-MM-DD-T HH:MM:SS`.
struct PostboardTimer;

impl tracing_subscriber::fmt::time::FormatTime for PostboardTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `<config>/logs/postboard.log`; falls back to stderr when the
///   file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = config::logs_dir().join("postboard.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PostboardTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PostboardTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let options = process_args(&args, config::settings());
    tracing::info!(
        base_url = %options.settings.base_url,
        headless = options.headless,
        "postboard starting"
    );
    if let Err(err) = app::run(options).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("postboard: {err}");
        std::process::exit(1);
    }
    tracing::info!("postboard exited");
}
