pub mod features;
pub mod shared;

// Re-export commonly used items from features
pub use features::exporter::Exporter;
pub use features::sessions::{
    local_hostname,
    parse_who_output,
    ActiveUsersCollector,
    SessionSnapshot,
    WhoCommand,
};

// Re-export shared functionality
pub use shared::config::ExporterConfig;
pub use shared::metrics::ExporterMetrics;
pub use shared::server::MetricsServer;
pub use shared::traits::{
    AsyncDataCollector,
    SessionSource,
};
pub use shared::error::{
    CollectionError,
    ExporterError,
};
