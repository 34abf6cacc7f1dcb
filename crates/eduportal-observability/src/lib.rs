//! EduPortal observability.
//!
//! - Console logging via `tracing-subscriber`
//! - Request logging middleware with per-request ids
//! - Prometheus metrics, switchable at runtime with `OBSERVABILITY_ENABLED`
//!
//! ```no_run
//! use eduportal_observability::{init_console_logging, init_metrics};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_console_logging();
//!     let _handle = init_metrics()?;
//!     Ok(())
//! }
//! ```

pub mod basic_logging;
pub mod request_logging;
pub mod telemetry;

pub use basic_logging::init_console_logging;
pub use metrics_exporter_prometheus::PrometheusHandle;
pub use request_logging::logging_middleware;
pub use telemetry::{
    init_metrics, is_observability_enabled, metrics_middleware, metrics_router, track_guard_redirect,
    track_token_rejected,
};
