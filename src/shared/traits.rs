use async_trait::async_trait;
use crate::shared::error::CollectionError;

#[async_trait]
pub trait AsyncDataCollector<T: Send> {
    async fn collect(&mut self) -> Result<T, CollectionError>;
    async fn validate(&self) -> Result<(), CollectionError>;
    async fn health_check(&self) -> bool;
}

/// Produces the raw text of a "who is logged in" query, one session per line.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn list_sessions(&self) -> Result<String, CollectionError>;

    /// Checks that the source can be queried at all.
    fn validate(&self) -> Result<(), CollectionError> {
        Ok(())
    }
}
