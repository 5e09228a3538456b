use crate::config::Settings;
use crate::state::{AppState, UserFilter};

/// What: Build the initial `AppState` from settings and CLI choices.
///
/// Inputs:
/// - `settings`: Effective settings (file values with CLI overrides applied).
/// - `initial_user`: Owner to filter by at startup, if any.
///
/// Output:
/// - Fresh state with an empty collection.
pub fn initialize_app_state(settings: &Settings, initial_user: Option<u64>) -> AppState {
    AppState {
        criterion: initial_user.map_or(UserFilter::All, UserFilter::User),
        toast_duration: settings.toast_duration(),
        default_user_id: settings.default_user_id,
        base_url: settings.base_url.clone(),
        ..AppState::default()
    }
}
