use std::sync::Arc;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Settings;
use crate::logic::posts::request_load;
use crate::sources::{HttpPostsApi, PostsApi};

use super::terminal::{install_panic_hook, restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
pub mod handlers;
mod init;
pub mod workers;

use background::spawn_event_thread;
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::initialize_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup choices for [`run`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Effective settings.
    pub settings: Settings,
    /// Initial user filter.
    pub initial_user: Option<u64>,
    /// Skip the terminal and stop after the initial load.
    pub headless: bool,
}

/// What: Run the application until the user quits.
///
/// Inputs:
/// - `options`: Settings and startup flags.
///
/// Output:
/// - `Ok(())` on a clean exit; an error if the terminal or HTTP client
///   cannot be set up.
///
/// Details:
/// - Sets up the terminal (unless headless), spawns workers, requests the
///   initial load and drives the event loop. The terminal is restored on
///   the way out even if the loop ends early.
pub async fn run(options: RunOptions) -> Result<()> {
    let RunOptions {
        settings,
        initial_user,
        headless,
    } = options;

    let api: Arc<dyn PostsApi> = Arc::new(HttpPostsApi::new(
        &settings.base_url,
        settings.connect_timeout(),
        settings.request_timeout(),
    )?);

    if !headless {
        install_panic_hook();
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initialize_app_state(&settings, initial_user);
    let mut channels = Channels::new(api, settings.tick_rate());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    tracing::info!(base_url = %app.base_url, headless, "postboard started");

    if request_load(&mut app, &channels.posts_req_tx) {
        run_event_loop(&mut terminal, &mut app, &mut channels).await;
    }
    cleanup_on_exit(&app, &channels);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
