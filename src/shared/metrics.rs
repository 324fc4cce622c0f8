//! Prometheus metrics published by the exporter.
//!
//! Each [`ExporterMetrics`] owns its own [`Registry`] rather than using the
//! process-wide default one, so the publisher loop (writer) and the HTTP
//! handler (reader) share exactly the handles they were given. `IntGauge`
//! and `IntCounter` are atomics, so no locking is needed between them.

use crate::shared::config::{
    ACTIVE_USERS_HELP, ACTIVE_USERS_METRIC, SAMPLE_FAILURES_HELP, SAMPLE_FAILURES_METRIC,
};
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

#[derive(Clone)]
pub struct ExporterMetrics {
    registry: Registry,

    /// Distinct users seen in the latest sample; zero when sampling failed
    pub active_users: IntGauge,

    /// Samples that fell back to zero
    pub sample_failures: IntCounter,
}

impl ExporterMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let active_users = IntGauge::new(ACTIVE_USERS_METRIC, ACTIVE_USERS_HELP)?;
        let sample_failures = IntCounter::new(SAMPLE_FAILURES_METRIC, SAMPLE_FAILURES_HELP)?;

        registry.register(Box::new(active_users.clone()))?;
        registry.register(Box::new(sample_failures.clone()))?;

        Ok(Self {
            registry,
            active_users,
            sample_failures,
        })
    }

    /// Renders every registered metric in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn content_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }
}
