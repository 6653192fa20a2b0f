use serde::{Deserialize, Serialize};

use crate::domain::ticket::Ticket;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    pub ticket: Ticket,
}

impl SearchResult {
    /// Display form of the score. The stored value is left as received.
    pub fn score_label(&self) -> String {
        format!("Score: {:.4}", self.score)
    }
}
