//! Ticket Console: owns ticket, draft, query and search result state and
//! drives the three request flows (reload, create, search) against the
//! remote services.
//!
//! All flows share one [`BusyFlag`]. Each flow takes a guard before its first
//! request and holds it until it returns, so the flag is released on every
//! exit path.

use std::sync::Arc;

use crate::domain::search::SearchResult;
use crate::domain::ticket::{Ticket, TicketDraft};
use crate::error::AppResult;
use crate::services::{SearchService, TicketService};
use crate::workflow::busy::{BusyFlag, BusyState};

/// Which flow failed most recently. Only a generic notice is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowFailure {
    Reload,
    Create,
    Search,
}

impl FlowFailure {
    pub fn message(&self) -> &'static str {
        match self {
            FlowFailure::Reload => "Failed to load tickets.",
            FlowFailure::Create => "Failed to create ticket.",
            FlowFailure::Search => "Search failed.",
        }
    }
}

pub struct TicketConsole {
    ticket_service: Arc<dyn TicketService>,
    search_service: Arc<dyn SearchService>,
    busy: BusyFlag,
    tickets: Vec<Ticket>,
    results: Vec<SearchResult>,
    draft: TicketDraft,
    query: String,
    last_failure: Option<FlowFailure>,
}

impl TicketConsole {
    pub fn new(
        ticket_service: Arc<dyn TicketService>,
        search_service: Arc<dyn SearchService>,
    ) -> Self {
        Self {
            ticket_service,
            search_service,
            busy: BusyFlag::new(),
            tickets: Vec::new(),
            results: Vec::new(),
            draft: TicketDraft::default(),
            query: String::new(),
            last_failure: None,
        }
    }

    /// Builds an idle console and immediately loads the ticket list. A failed
    /// initial load is recorded on the console rather than returned.
    pub async fn mount(
        ticket_service: Arc<dyn TicketService>,
        search_service: Arc<dyn SearchService>,
    ) -> Self {
        let mut console = Self::new(ticket_service, search_service);
        if let Err(err) = console.reload().await {
            tracing::warn!(error = %err, "initial ticket load failed");
        }
        console
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_failure(&self) -> Option<FlowFailure> {
        self.last_failure
    }

    pub fn busy_state(&self) -> BusyState {
        self.busy.state()
    }

    #[cfg(test)]
    pub(crate) fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Submit affordances are disabled while any flow is in flight.
    pub fn can_submit(&self) -> bool {
        !self.busy.is_busy()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replaces the ticket list with the service's current list. On failure
    /// the previous list stays in place.
    pub async fn reload(&mut self) -> AppResult<()> {
        let _busy = self.busy.acquire();
        self.last_failure = None;
        self.fetch_tickets().await
    }

    /// Sends the draft as-is, then reloads the ticket list. The busy window
    /// covers both requests. On a failed create the draft is kept and no
    /// reload is issued.
    pub async fn submit_draft(&mut self) -> AppResult<()> {
        let _busy = self.busy.acquire();
        self.last_failure = None;

        if let Err(err) = self.ticket_service.create_ticket(&self.draft).await {
            tracing::warn!(error = %err, "ticket creation failed");
            self.last_failure = Some(FlowFailure::Create);
            return Err(err);
        }
        tracing::info!(title = %self.draft.title, "ticket created");
        self.draft.clear();

        self.fetch_tickets().await
    }

    /// Runs the current query and replaces the result list wholesale. The
    /// query itself is kept. On failure the previous results stay in place.
    pub async fn submit_query(&mut self) -> AppResult<()> {
        let _busy = self.busy.acquire();
        self.last_failure = None;

        match self.search_service.search(&self.query).await {
            Ok(results) => {
                tracing::debug!(query = %self.query, count = results.len(), "search completed");
                self.results = results;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, query = %self.query, "search failed");
                self.last_failure = Some(FlowFailure::Search);
                Err(err)
            }
        }
    }

    // Callers hold the busy guard.
    async fn fetch_tickets(&mut self) -> AppResult<()> {
        match self.ticket_service.list_tickets().await {
            Ok(tickets) => {
                tracing::debug!(count = tickets.len(), "ticket list replaced");
                self.tickets = tickets;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "ticket reload failed");
                self.last_failure = Some(FlowFailure::Reload);
                Err(err)
            }
        }
    }
}
