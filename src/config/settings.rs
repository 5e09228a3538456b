use std::fs;
use std::path::Path;
use std::time::Duration;

use super::paths::{config_dir, settings_path_in};

/// Default service root: the public JSONPlaceholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Written to `settings.conf` on first run.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "# postboard settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # or // are comments; ' # ...' after a value is ignored.\n\
#\n\
# Root of the posts REST service\n\
base_url = https://jsonplaceholder.typicode.com\n\
#\n\
# Network limits (seconds). A request that exceeds them fails with a network error.\n\
request_timeout_secs = 30\n\
connect_timeout_secs = 10\n\
#\n\
# Owner assigned to new posts when the list is not filtered to a single user\n\
default_user_id = 1\n\
#\n\
# UI housekeeping interval (milliseconds) and toast lifetime (seconds)\n\
tick_rate_ms = 200\n\
toast_duration_secs = 4\n";

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Service root used for every request.
    pub base_url: String,
    /// Whole-request timeout.
    pub request_timeout_secs: u64,
    /// Connection establishment timeout.
    pub connect_timeout_secs: u64,
    /// Owner for new posts when no user filter is selected.
    pub default_user_id: u64,
    /// Tick interval driving toast expiry and redraws.
    pub tick_rate_ms: u64,
    /// How long a non-blocking notification stays visible.
    pub toast_duration_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            default_user_id: 1,
            tick_rate_ms: 200,
            toast_duration_secs: 4,
        }
    }
}

impl Settings {
    /// Whole-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Tick interval as a [`Duration`].
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Toast lifetime as a [`Duration`].
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

/// What: Remove a trailing ` # ...` or ` // ...` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text after `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A marker only counts when preceded by whitespace, so URLs such as
///   `https://host/#frag` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut cut = s.len();
    for (i, ch) in s.char_indices() {
        let after_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
        if after_space && (ch == '#' || s[i..].starts_with("//")) {
            cut = i;
            break;
        }
    }
    s[..cut].trim()
}

/// What: Parse a positive integer setting, keeping `current` on bad input.
fn parse_positive(key: &str, val: &str, current: u64) -> u64 {
    match val.parse::<u64>() {
        Ok(v) if v > 0 => v,
        _ => {
            tracing::warn!(key, value = val, "ignoring invalid setting value");
            current
        }
    }
}

/// What: Parse settings from `settings.conf` text.
///
/// Inputs:
/// - `content`: Full file contents.
///
/// Output:
/// - Settings with recognized keys applied over the defaults.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces are treated as `_`.
/// - Unknown keys and malformed lines are skipped; invalid values keep the default.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "base_url" | "api_base_url" | "server" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    out.base_url = val.trim_end_matches('/').to_string();
                } else {
                    tracing::warn!(value = val, "base_url must start with http:// or https://");
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                out.request_timeout_secs = parse_positive(&key, val, out.request_timeout_secs);
            }
            "connect_timeout_secs" => {
                out.connect_timeout_secs = parse_positive(&key, val, out.connect_timeout_secs);
            }
            "default_user_id" => {
                out.default_user_id = parse_positive(&key, val, out.default_user_id);
            }
            "tick_rate_ms" => {
                out.tick_rate_ms = parse_positive(&key, val, out.tick_rate_ms);
            }
            "toast_duration_secs" => {
                out.toast_duration_secs = parse_positive(&key, val, out.toast_duration_secs);
            }
            _ => {
                tracing::debug!(key = %key, "unknown settings key");
            }
        }
    }
    out
}

/// What: Load settings from `dir/settings.conf`, writing the skeleton if missing.
///
/// Inputs:
/// - `dir`: Directory holding `settings.conf`.
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
pub fn load_settings_from(dir: &Path) -> Settings {
    let path = settings_path_in(dir);
    if !path.is_file() {
        match fs::write(&path, SKELETON_SETTINGS_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not write default settings");
            }
        }
    }
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            Settings::default()
        }
    }
}

/// Load user settings from the standard config directory.
/// Falls back to `Settings::default()` when missing or unreadable.
pub fn settings() -> Settings {
    load_settings_from(&config_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The skeleton parses back to the defaults.
    fn skeleton_matches_defaults() {
        assert_eq!(parse_settings(SKELETON_SETTINGS_CONTENT), Settings::default());
    }

    #[test]
    /// What: Recognized keys override defaults; junk is ignored.
    ///
    /// - Input: Mixed-case keys, inline comments, an unknown key, a bad number
    /// - Output: Valid overrides applied, others keep defaults
    fn parse_applies_overrides_and_skips_junk() {
        let text = "\
# comment
Base-URL = http://localhost:3000/   # local mock
request.timeout.secs = 5
default_user_id = zero
default_user_id = 0
tick_rate_ms = 50 // faster
no equals sign here
colour = purple
";
        let s = parse_settings(text);
        assert_eq!(s.base_url, "http://localhost:3000");
        assert_eq!(s.request_timeout_secs, 5);
        assert_eq!(s.default_user_id, 1);
        assert_eq!(s.tick_rate_ms, 50);
        assert_eq!(s.toast_duration_secs, 4);
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let s = parse_settings("base_url = ftp://example.org");
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    /// What: Comment markers inside URLs are kept.
    fn inline_comment_needs_leading_space() {
        assert_eq!(
            strip_inline_comment("https://h/x#frag  # note"),
            "https://h/x#frag"
        );
        assert_eq!(strip_inline_comment("https://h/a//b"), "https://h/a//b");
        assert_eq!(strip_inline_comment("12 // twelve"), "12");
    }

    #[test]
    /// What: Loading from an empty directory writes and reads the skeleton.
    fn load_writes_skeleton_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings_from(dir.path());
        assert_eq!(s, Settings::default());
        let written = fs::read_to_string(settings_path_in(dir.path())).expect("skeleton");
        assert!(written.contains("base_url"));
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(settings_path_in(dir.path()), "toast_duration_secs = 9\n").expect("write");
        assert_eq!(load_settings_from(dir.path()).toast_duration_secs, 9);
    }
}
