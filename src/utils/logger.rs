use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` always wins; otherwise `--verbose`
/// turns on debug output and `default_level` (from the config file) is used.
pub fn init_cli_logger(verbose: bool, default_level: Option<&str>) {
    let fallback = if verbose {
        "address_book=debug,info".to_string()
    } else {
        format!("address_book={}", default_level.unwrap_or("warn"))
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // stdout belongs to the conversation with the user
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
