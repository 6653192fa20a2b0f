use serde::{Deserialize, Serialize};

/// A ticket as stored by the remote service. Never edited locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: String,
}

impl Ticket {
    pub fn heading(&self) -> String {
        format!("#{} — {}", self.id, self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
}

impl TicketDraft {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_heading_with_em_dash() {
        let ticket = Ticket {
            id: 1,
            title: "A".to_string(),
            description: "d".to_string(),
            created_at: "t1".to_string(),
        };
        assert_eq!(ticket.heading(), "#1 — A");
    }

    #[test]
    fn parses_service_payload() {
        let raw = r#"[{"id":7,"title":"VPN","description":"drops hourly","created_at":"2024-05-01T10:00:00"}]"#;
        let tickets: Vec<Ticket> = serde_json::from_str(raw).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 7);
        assert_eq!(tickets[0].created_at, "2024-05-01T10:00:00");
    }

    #[test]
    fn clearing_draft_empties_both_fields() {
        let mut draft = TicketDraft {
            title: "Printer".to_string(),
            description: "jammed".to_string(),
        };
        draft.clear();
        assert_eq!(draft, TicketDraft::default());
    }
}
