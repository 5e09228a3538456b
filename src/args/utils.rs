//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`.
/// - `RUST_LOG`, when set, takes precedence over both at subscriber setup.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    fn verbose_wins() {
        let args = Args {
            log_level: "warn".into(),
            verbose: true,
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
        let quiet = Args {
            log_level: "warn".into(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&quiet), "warn");
    }
}
