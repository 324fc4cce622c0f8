use std::io;
use std::net::SocketAddr;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("Failed to bind metrics endpoint on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Metrics registry error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Metrics server failed: {0}")]
    Server(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command exited with {status}: {stderr}")]
    CommandFailed { status: ExitStatus, stderr: String },

    #[error("Command timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse data: {0}")]
    Parse(String),
}
