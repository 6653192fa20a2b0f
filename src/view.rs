//! Plain-text rendering of console state.

use std::fmt::Write as _;

use crate::domain::search::SearchResult;
use crate::domain::ticket::Ticket;
use crate::workflow::{BusyState, FlowFailure, TicketConsole};

pub fn render_console(console: &TicketConsole) -> String {
    let busy = console.busy_state() == BusyState::Busy;
    let mut out = String::new();

    let _ = writeln!(out, "== Create Ticket ==");
    let _ = writeln!(out, "Title: {}", console.draft().title);
    let _ = writeln!(out, "Description: {}", console.draft().description);
    let _ = writeln!(out, "{}", button("Submit", "Working...", busy));
    notice(&mut out, console.last_failure(), FlowFailure::Create);
    out.push('\n');

    let _ = writeln!(out, "== Semantic Search ==");
    let _ = writeln!(out, "Query: {}", console.query());
    let _ = writeln!(out, "{}", button("Search", "Searching...", busy));
    notice(&mut out, console.last_failure(), FlowFailure::Search);
    let _ = writeln!(out, "-- Results --");
    out.push_str(&render_results(console.results()));
    out.push('\n');

    let _ = writeln!(out, "== Tickets ==");
    notice(&mut out, console.last_failure(), FlowFailure::Reload);
    out.push_str(&render_tickets(console.tickets()));
    out
}

pub fn render_tickets(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets yet.\n".to_string();
    }
    let mut out = String::new();
    for ticket in tickets {
        let _ = writeln!(out, "{}", ticket.heading());
        let _ = writeln!(out, "  {}", ticket.created_at);
        let _ = writeln!(out, "  {}", ticket.description);
    }
    out
}

pub fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results yet.\n".to_string();
    }
    let mut out = String::new();
    for result in results {
        let _ = writeln!(out, "{}", result.ticket.title);
        let _ = writeln!(out, "  {}", result.score_label());
        let _ = writeln!(out, "  {}", result.ticket.description);
    }
    out
}

fn button(idle: &str, busy_label: &str, busy: bool) -> String {
    format!("[{}]", if busy { busy_label } else { idle })
}

fn notice(out: &mut String, failure: Option<FlowFailure>, flow: FlowFailure) {
    if failure == Some(flow) {
        let _ = writeln!(out, "! {}", flow.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::workflow::console::tests::{FakeApi, ticket};

    #[tokio::test]
    async fn renders_mounted_ticket_list() {
        let api = FakeApi::new();
        api.push_list(Ok(vec![Ticket {
            id: 1,
            title: "A".to_string(),
            description: "d".to_string(),
            created_at: "t1".to_string(),
        }]));

        let console = TicketConsole::mount(api.clone(), api.clone()).await;
        let rendered = render_tickets(console.tickets());

        assert_eq!(rendered.lines().filter(|l| l.starts_with('#')).count(), 1);
        assert!(rendered.starts_with("#1 — A\n"));
    }

    #[tokio::test]
    async fn renders_search_result_with_score() {
        let api = FakeApi::new();
        api.push_search(Ok(vec![SearchResult {
            score: 0.87,
            ticket: Ticket {
                id: 2,
                title: "Outage".to_string(),
                description: "x".to_string(),
                created_at: "t2".to_string(),
            },
        }]));
        let mut console = TicketConsole::new(api.clone(), api.clone());
        console.set_query("network outage");

        console.submit_query().await.unwrap();
        let rendered = render_results(console.results());

        assert_eq!(rendered, "Outage\n  Score: 0.8700\n  x\n");
    }

    #[tokio::test]
    async fn failed_load_is_not_rendered_as_empty_list() {
        let api = FakeApi::new();
        api.push_list(Err(AppError::TicketService("down".to_string())));

        let console = TicketConsole::mount(api.clone(), api.clone()).await;
        let rendered = render_console(&console);

        assert!(rendered.contains("! Failed to load tickets."));
    }

    #[tokio::test]
    async fn successful_empty_load_shows_empty_state_only() {
        let api = FakeApi::new();

        let console = TicketConsole::mount(api.clone(), api.clone()).await;
        let rendered = render_console(&console);

        assert!(rendered.contains("No tickets yet."));
        assert!(rendered.contains("No results yet."));
        assert!(!rendered.contains('!'));
    }

    #[test]
    fn busy_console_shows_working_labels() {
        let api = FakeApi::new();
        let console = TicketConsole::new(api.clone(), api.clone());
        let _guard = console.busy_flag().acquire();

        let rendered = render_console(&console);

        assert!(rendered.contains("[Working...]"));
        assert!(rendered.contains("[Searching...]"));
    }

    #[test]
    fn idle_console_shows_submit_labels() {
        let api = FakeApi::new();
        let console = TicketConsole::new(api.clone(), api.clone());

        let rendered = render_console(&console);

        assert!(rendered.contains("[Submit]"));
        assert!(rendered.contains("[Search]"));
    }

    #[test]
    fn renders_tickets_in_given_order() {
        let rendered = render_tickets(&[ticket(3, "C"), ticket(1, "A")]);
        let headings: Vec<_> = rendered.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(headings, vec!["#3 — C", "#1 — A"]);
    }
}
