use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging for the server and the CLI.
///
/// - **Filter**: `RUST_LOG` when set, otherwise `LOG_LEVEL` (default "info")
///   for the eduportal crates with noisy dependencies held at warn
/// - **Format**: compact, with module targets and source locations
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "eduportal={level},eduportal_auth={level},eduportal_rbac={level},eduportal_config={level},eduportal_models={level},eduportal_cli={level},tower_http=warn,hyper=warn,axum::rejection=trace",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
