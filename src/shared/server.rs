use crate::shared::error::ExporterError;
use crate::shared::metrics::ExporterMetrics;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use log::{error, info};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

fn create_router(metrics: ExporterMetrics) -> Router {
    Router::new()
        .route("/", get(scrape))
        .route("/metrics", get(scrape))
        .with_state(metrics)
}

async fn scrape(State(metrics): State<ExporterMetrics>) -> Response {
    match metrics.render() {
        Ok(body) => ([(header::CONTENT_TYPE, metrics.content_type())], body).into_response(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// A bound, running metrics endpoint.
pub struct MetricsServer {
    local_addr: SocketAddr,
    task: JoinHandle<Result<(), ExporterError>>,
}

impl MetricsServer {
    /// Binds `addr` and starts serving in the background until `shutdown` fires.
    /// A bind failure is returned to the caller instead of being retried.
    pub async fn bind(
        addr: SocketAddr,
        metrics: ExporterMetrics,
        shutdown: CancellationToken,
    ) -> Result<Self, ExporterError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ExporterError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ExporterError::Bind { addr, source })?;

        info!("Serving metrics on http://{}/metrics", local_addr);

        let app = create_router(metrics);
        let task = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown.cancelled_owned())
                .await
                .map_err(ExporterError::Server)
        });

        Ok(Self { local_addr, task })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Waits for the server to finish after shutdown was requested.
    pub async fn join(self) -> Result<(), ExporterError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(ExporterError::Server(std::io::Error::other(e))),
        }
    }
}
