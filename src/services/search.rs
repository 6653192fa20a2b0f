use async_trait::async_trait;

use crate::domain::search::SearchResult;
use crate::error::AppResult;

#[async_trait]
pub trait SearchService: Send + Sync {
    /// Results come back ranked, most relevant first.
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>>;
}
