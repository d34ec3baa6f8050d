use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// `RUST_LOG` is honoured; this crate defaults to `debug` and the HTTP stack to `warn`.
pub fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["backtest_data_fetcher=debug", "reqwest=warn", "hyper=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
