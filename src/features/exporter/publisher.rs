use crate::features::sessions::ActiveUsersCollector;
use crate::shared::config::ExporterConfig;
use crate::shared::error::ExporterError;
use crate::shared::metrics::ExporterMetrics;
use crate::shared::server::MetricsServer;
use crate::shared::traits::AsyncDataCollector;
use log::{info, warn};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Publishes the active user count on a metrics endpoint.
///
/// Created in the STARTING state by [`Exporter::start`], which either binds
/// the endpoint (RUNNING) or fails. [`Exporter::run`] then samples until the
/// shutdown token is cancelled.
pub struct Exporter {
    collector: ActiveUsersCollector,
    metrics: ExporterMetrics,
    server: MetricsServer,
    sample_interval: Duration,
    shutdown: CancellationToken,
}

impl Exporter {
    pub async fn start(
        config: &ExporterConfig,
        collector: ActiveUsersCollector,
        shutdown: CancellationToken,
    ) -> Result<Self, ExporterError> {
        info!("Starting active users exporter on port {}", config.listen_addr.port());

        let metrics = ExporterMetrics::new()?;
        let collector = collector.with_failure_counter(metrics.sample_failures.clone());

        if let Err(e) = collector.validate().await {
            warn!("Session source is not usable yet: {}", e);
        }

        let server = MetricsServer::bind(config.listen_addr, metrics.clone(), shutdown.clone()).await?;
        info!("Exporter started successfully");

        Ok(Self {
            collector,
            metrics,
            server,
            sample_interval: config.sample_interval,
            shutdown,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.server.local_addr()
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.metrics
    }

    /// Takes one sample and overwrites the gauge with it.
    pub async fn publish_once(&mut self) -> u64 {
        let count = self.collector.sample().await;
        self.metrics.active_users.set(count as i64);
        count
    }

    /// Samples every interval until the shutdown token is cancelled, then
    /// waits for the metrics server to drain.
    pub async fn run(mut self) -> Result<(), ExporterError> {
        let mut interval = time::interval(self.sample_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let shutdown = self.shutdown.clone();

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,
                _ = interval.tick() => {
                    // Not raced against shutdown: the sample is bounded by the command timeout.
                    self.publish_once().await;
                }
            }
        }

        info!("Shutting down active users exporter");
        self.server.join().await
    }
}
