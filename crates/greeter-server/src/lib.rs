//! HTTP front end for the greeter service.
//!
//! The router is constructible without a socket so the integration suite
//! can drive it directly; `serve` owns the listener for the life of the
//! process.

pub mod handlers;

use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Port the service listens on.
pub const PORT: u16 = 3333;

/// Builds the application router: the route table plus request tracing.
pub fn app() -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/", get(handlers::root))
        .layer(trace_layer)
}

/// Binds the listening socket and serves requests indefinitely.
///
/// The startup line is logged only after the bind succeeds. A bind failure
/// (port in use, insufficient privilege) propagates to the caller; there is
/// no retry.
pub async fn serve(port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("app is up and running on port {}", port);

    axum::serve(listener, app()).await?;

    Ok(())
}
