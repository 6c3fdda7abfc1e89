use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter: our crate at info (debug with `verbose`), everything
/// else quiet. `RUST_LOG` takes precedence.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "slidedeck=debug" } else { "slidedeck=info" }
}

/// Initialize the tracing subscriber for logging.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_parse() {
        for verbose in [false, true] {
            let directive = default_filter(verbose);
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }
}
