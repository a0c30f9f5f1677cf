use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown by default.
const CRATE_TARGETS: &[&str] = &[
    "claimcast",
    "claimcast_analysis",
    "claimcast_calendar",
    "claimcast_io",
    "claimcast_pipeline",
    "claimcast_series",
    "claimcast_stats",
    "claimcast_synth",
];

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `-v` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Level for a `-v` count: none is warn, then info, debug, trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `target=level` directives for every workspace crate.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = default_directives(1);
        assert!(directives.starts_with("claimcast=info,"));
        assert!(directives.contains("claimcast_synth=info"));
        assert_eq!(directives.split(',').count(), CRATE_TARGETS.len());
    }
}
