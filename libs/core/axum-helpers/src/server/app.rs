use super::shutdown::ShutdownCoordinator;
use crate::errors::AppError;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
};
use core_config::server::ServerConfig;
use std::any::Any;
use std::future::Future;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

/// Wraps API routes with the layers every service shares: JSON 404 fallback,
/// panic recovery as a 500 `INTERNAL_ERROR`, request tracing and security
/// headers.
///
/// Routes are mounted as given; nest them under their resource path first.
pub fn create_router(apis: Router) -> Router {
    Router::new()
        .merge(apis)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
}

/// Serve `router` until SIGINT/SIGTERM, let in-flight requests finish, then
/// run `cleanup` bounded by `server_config.shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config.server, async move {
///     drop(client);
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_with_shutdown(listener, router, server_config, ShutdownCoordinator::new(), cleanup).await
}

pub(crate) async fn serve_with_shutdown<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    server_config: &ServerConfig,
    coordinator: ShutdownCoordinator,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let shutdown_timeout = server_config.shutdown_timeout;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e))?;

    // Reached only once in-flight requests have drained.
    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    Ok(())
}

/// Turns a handler panic into a logged `INTERNAL_ERROR` response.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::InternalServerError(detail).into_response()
}
