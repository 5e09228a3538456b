//! Configuration: on-disk locations and `settings.conf` parsing.

/// Path resolution for config and log directories.
mod paths;
/// Settings file parsing and defaults.
mod settings;

pub use paths::{config_dir, logs_dir, settings_path_in};
pub use settings::{DEFAULT_BASE_URL, Settings, load_settings_from, parse_settings, settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
