use dotenvy::dotenv;
use eduportal::router::init_router;
use eduportal::state::init_app_state;
use eduportal_config::ServerConfig;
use eduportal_observability::{init_console_logging, init_metrics, metrics_router};
use eduportal_rbac::dashboard_navigation;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_console_logging();

    let state = init_app_state();
    let server_config = ServerConfig::from_env();

    info!(
        policy = %state.access.policy(),
        rules = state.access.routes().len(),
        "Access control loaded"
    );

    let catalog = dashboard_navigation();
    for path in state
        .access
        .routes()
        .unregistered(catalog.iter().map(|item| item.path.as_str()))
    {
        warn!(path, policy = %state.access.policy(), "Navigation path has no access rule");
    }

    let mut app = init_router(state);
    if let Some(handle) = init_metrics()? {
        app = app.merge(metrics_router(handle));
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🚀 Server running on http://{}", address);
    info!("📚 Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
