use anyhow::Result;
use problem_tracker_core::AppConfig;
use problem_tracker_http::{AppState, create_router};
use problem_tracker_service::{ProblemService, start_weekly_export};
use std::sync::Arc;

pub(crate) async fn run(config: &AppConfig, host: &str, port: u16, scheduler: bool) -> Result<()> {
    let service = Arc::new(ProblemService::from_config(config)?);

    let export_task = if scheduler {
        Some(start_weekly_export(Arc::clone(&service), config.schedule))
    } else {
        tracing::info!("Weekly export scheduler disabled");
        None
    };

    let router = create_router(Arc::new(AppState::new(service)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    if let Some(task) = export_task {
        task.abort();
    }
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
