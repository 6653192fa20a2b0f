use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::domain::search::SearchResult;
use crate::domain::ticket::{Ticket, TicketDraft};
use crate::error::{AppError, AppResult};
use crate::services::{HealthService, SearchService, TicketService};

/// HTTP client for the TicketLens API. Serves both the ticket store and the
/// semantic search endpoints, which live behind the same base URL.
pub struct TicketApiClient {
    http: Client,
    base_url: String,
}

impl TicketApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::Configuration(
                "API base URL must not be empty".to_string(),
            ));
        }
        reqwest::Url::parse(&base_url).map_err(|err| {
            AppError::Configuration(format!("invalid API base URL '{base_url}': {err}"))
        })?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { http, base_url })
    }

    fn tickets_endpoint(&self) -> String {
        format!("{}/api/tickets", self.base_url)
    }

    fn search_endpoint(&self) -> String {
        format!("{}/api/search", self.base_url)
    }

    fn health_endpoint(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

/// Non-2xx responses are failures; the body is kept only for the log line.
async fn ensure_success(response: Response, service: &str) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unable to read response>".to_string());
    tracing::warn!(%status, %body, "{service} rejected request");
    Err(format!("{service} responded with {status}"))
}

#[async_trait]
impl TicketService for TicketApiClient {
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>> {
        let url = self.tickets_endpoint();
        tracing::debug!(%url, "loading tickets");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| AppError::TicketService(format!("failed to reach ticket service: {err}")))?;
        let response = ensure_success(response, "ticket service")
            .await
            .map_err(AppError::TicketService)?;

        let tickets: Vec<Ticket> = response.json().await.map_err(|err| {
            AppError::TicketService(format!("failed to parse ticket list: {err}"))
        })?;
        tracing::debug!(count = tickets.len(), "tickets loaded");
        Ok(tickets)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> AppResult<()> {
        let url = self.tickets_endpoint();
        tracing::debug!(%url, title = %draft.title, "creating ticket");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&CreateTicketRequest::from(draft))
            .send()
            .await
            .map_err(|err| AppError::TicketService(format!("failed to reach ticket service: {err}")))?;
        ensure_success(response, "ticket service")
            .await
            .map_err(AppError::TicketService)?;
        Ok(())
    }
}

#[async_trait]
impl SearchService for TicketApiClient {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let url = self.search_endpoint();
        tracing::debug!(%url, %query, "searching tickets");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&SearchRequest { query })
            .send()
            .await
            .map_err(|err| AppError::SearchService(format!("failed to reach search service: {err}")))?;
        let response = ensure_success(response, "search service")
            .await
            .map_err(AppError::SearchService)?;

        let results: Vec<SearchResult> = response.json().await.map_err(|err| {
            AppError::SearchService(format!("failed to parse search results: {err}"))
        })?;
        tracing::debug!(count = results.len(), "search results received");
        Ok(results)
    }
}

#[async_trait]
impl HealthService for TicketApiClient {
    async fn health(&self) -> AppResult<String> {
        let response = self
            .http
            .get(self.health_endpoint())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| AppError::TicketService(format!("failed to reach ticket service: {err}")))?;
        let response = ensure_success(response, "ticket service")
            .await
            .map_err(AppError::TicketService)?;

        let payload: HealthResponse = response.json().await.map_err(|err| {
            AppError::TicketService(format!("failed to parse health response: {err}"))
        })?;
        Ok(payload.status)
    }
}

#[derive(Serialize)]
struct CreateTicketRequest<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> From<&'a TicketDraft> for CreateTicketRequest<'a> {
    fn from(draft: &'a TicketDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
        }
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}
