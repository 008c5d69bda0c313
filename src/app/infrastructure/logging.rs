use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "gapp_text_editor";

/// Log level for our own target given the number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter directive string.
///
/// A `RUST_LOG` value that already mentions this crate wins outright;
/// any other value is kept and our default directive appended.
pub fn filter_directive(verbosity: u8, env_override: &str) -> String {
    let default_directive = format!("{}={}", CRATE_TARGET, level_for_verbosity(verbosity));
    let env_override = env_override.trim();
    if env_override.is_empty() {
        default_directive
    } else if env_override.contains(CRATE_TARGET) {
        env_override.to_string()
    } else {
        format!("{},{}", env_override, default_directive)
    }
}

/// Install the global fmt subscriber. Safe to call once, from `main`.
pub fn init(verbosity: u8) {
    let env_override = std::env::var("RUST_LOG").unwrap_or_default();
    let directive = filter_directive(verbosity, &env_override);

    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(true)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to initialise logging: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(200), "trace");
    }

    #[test]
    fn test_directive_without_env() {
        assert_eq!(filter_directive(0, ""), "gapp_text_editor=warn");
        assert_eq!(filter_directive(2, "   "), "gapp_text_editor=debug");
    }

    #[test]
    fn test_env_mentioning_crate_wins() {
        assert_eq!(
            filter_directive(0, "gapp_text_editor=trace"),
            "gapp_text_editor=trace"
        );
    }

    #[test]
    fn test_foreign_env_is_merged() {
        assert_eq!(
            filter_directive(1, "fltk=debug"),
            "fltk=debug,gapp_text_editor=info"
        );
    }
}
