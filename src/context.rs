use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::infra::ticket_api::TicketApiClient;
use crate::services::{HealthService, SearchService, TicketService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub ticket_service: Arc<dyn TicketService>,
    pub search_service: Arc<dyn SearchService>,
    pub health_service: Arc<dyn HealthService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        ticket_service: Arc<dyn TicketService>,
        search_service: Arc<dyn SearchService>,
        health_service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            config,
            ticket_service,
            search_service,
            health_service,
        }
    }

    /// Wires every service to one HTTP client for the configured API.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let client = Arc::new(TicketApiClient::new(
            &config.api_base_url,
            config.request_timeout,
        )?);
        Ok(Self::new(config, client.clone(), client.clone(), client))
    }
}
