use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait HealthService: Send + Sync {
    async fn health(&self) -> AppResult<String>;
}
