use env_logger::{Builder, Env};
use log::{error, info};
use session_exporter::{
    shared::error::ExporterError,
    local_hostname,
    ActiveUsersCollector,
    Exporter,
    ExporterConfig,
    WhoCommand,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), ExporterError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = ExporterConfig::default();
    info!("Monitoring active user sessions on {}", local_hostname());

    let shutdown = CancellationToken::new();
    let collector = ActiveUsersCollector::new(Box::new(WhoCommand::new(config.command_timeout)));

    let exporter = match Exporter::start(&config, collector, shutdown.clone()).await {
        Ok(exporter) => exporter,
        Err(e) => {
            error!("Failed to start exporter: {}", e);
            return Err(e);
        }
    };

    tokio::spawn(async move {
        wait_for_signal().await;
        info!("Received shutdown signal");
        shutdown.cancel();
    });

    exporter.run().await
}

#[cfg(unix)]
async fn wait_for_signal() {
    use signal::unix::SignalKind;

    let mut terminate = match signal::unix::signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(e) => {
            error!("Failed to install SIGTERM handler: {}", e);
            let _ = signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", e);
    }
}
