use crate::shared::traits::{AsyncDataCollector, SessionSource};
use crate::shared::error::CollectionError;
use crate::shared::config::COMMAND_TIMEOUT;
use crate::features::sessions::models::{parse_who_output, SessionSnapshot};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use prometheus::IntCounter;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use which::which;

/// Name of the local host, or `unknown` if it cannot be read.
pub fn local_hostname() -> String {
    whoami::fallible::hostname().unwrap_or_else(|e| {
        warn!("Failed to read host name: {}", e);
        String::from("unknown")
    })
}

/// Runs the host's `who` command.
pub struct WhoCommand {
    program: String,
    timeout: Duration,
}

impl WhoCommand {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("who", timeout)
    }

    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl Default for WhoCommand {
    fn default() -> Self {
        Self::new(COMMAND_TIMEOUT)
    }
}

#[async_trait]
impl SessionSource for WhoCommand {
    async fn list_sessions(&self) -> Result<String, CollectionError> {
        let path = which(&self.program)
            .map_err(|_| CollectionError::CommandNotFound(self.program.clone()))?;

        let child = Command::new(&path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        // Dropping the future on timeout kills the child.
        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| CollectionError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(CollectionError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|e| CollectionError::Parse(format!("{} output is not UTF-8: {}", self.program, e)))
    }

    fn validate(&self) -> Result<(), CollectionError> {
        which(&self.program)
            .map(|_| ())
            .map_err(|_| CollectionError::CommandNotFound(self.program.clone()))
    }
}

/// Samples the number of distinct logged-in users.
pub struct ActiveUsersCollector {
    source: Box<dyn SessionSource>,
    hostname: String,
    failures: Option<IntCounter>,
}

impl ActiveUsersCollector {
    pub fn new(source: Box<dyn SessionSource>) -> Self {
        Self {
            source,
            hostname: local_hostname(),
            failures: None,
        }
    }

    /// Counts every sample that falls back to zero on `counter`.
    pub fn with_failure_counter(mut self, counter: IntCounter) -> Self {
        self.failures = Some(counter);
        self
    }

    async fn collect_sessions(&self) -> Result<SessionSnapshot, CollectionError> {
        let output = self.source.list_sessions().await?;
        let users = parse_who_output(&output);
        Ok(SessionSnapshot::new(self.hostname.clone(), users))
    }

    /// Returns the distinct user count, or zero if the query failed.
    ///
    /// Failures are logged and never returned; the next call is the retry.
    pub async fn sample(&mut self) -> u64 {
        match self.collect_sessions().await {
            Ok(snapshot) => {
                info!("Found {} active users: {:?}", snapshot.count(), snapshot.users);
                debug!("Session snapshot {} taken at {}", snapshot.id, snapshot.timestamp);
                snapshot.count() as u64
            }
            Err(e) => {
                error!("Error getting user count: {}", e);
                if let Some(failures) = &self.failures {
                    failures.inc();
                }
                0
            }
        }
    }
}

#[async_trait]
impl AsyncDataCollector<SessionSnapshot> for ActiveUsersCollector {
    async fn collect(&mut self) -> Result<SessionSnapshot, CollectionError> {
        let snapshot = self.collect_sessions().await?;
        info!("Collected {} active users", snapshot.count());
        Ok(snapshot)
    }

    async fn validate(&self) -> Result<(), CollectionError> {
        self.source.validate()
    }

    async fn health_check(&self) -> bool {
        self.source.validate().is_ok()
    }
}
