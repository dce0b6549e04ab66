//! Log output for the `ozone` binary.
//!
//! Logs go to stderr: every subcommand prints its JSON on stdout.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown; anything else stays silent.
const CRATE_TARGETS: &[&str] = &[
    "ozone",
    "ozone_calendar",
    "ozone_features",
    "ozone_filter",
    "ozone_view",
];

/// Level for a `-v` count: none warns, `-v` info, `-vv` debug, more traces.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `target=level` directives for every workspace crate.
fn directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG`, when set, replaces the
/// directives derived from `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directives_cover_every_crate() {
        let d = directives("debug");
        assert!(d.starts_with("ozone=debug,"));
        assert!(d.contains("ozone_view=debug"));
        assert_eq!(d.split(',').count(), CRATE_TARGETS.len());
    }

    #[test]
    fn directives_parse_as_filter() {
        assert!(EnvFilter::try_new(directives("info")).is_ok());
    }
}
