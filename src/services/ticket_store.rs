use async_trait::async_trait;

use crate::domain::ticket::{Ticket, TicketDraft};
use crate::error::AppResult;

#[async_trait]
pub trait TicketService: Send + Sync {
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>>;
    /// Persists a draft. The service's response body is not used.
    async fn create_ticket(&self, draft: &TicketDraft) -> AppResult<()>;
}
