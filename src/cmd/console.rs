use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::view::render_console;
use crate::workflow::TicketConsole;

const HELP: &str = "\
Commands:
  title <text>         set the draft title
  description <text>   set the draft description
  submit               create a ticket from the draft
  query <text>         set the search query
  search               run the search query
  reload               refresh the ticket list
  show                 redraw the console
  help                 show this help
  quit                 leave the console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Title(String),
    Description(String),
    Submit,
    Query(String),
    Search,
    Reload,
    Show,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line. Text arguments keep their inner spacing and may
    /// be empty.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line.trim_end(), ""),
        };

        match word.to_lowercase().as_str() {
            "title" => Ok(ConsoleCommand::Title(rest.to_string())),
            "description" | "desc" => Ok(ConsoleCommand::Description(rest.to_string())),
            "submit" => Ok(ConsoleCommand::Submit),
            "query" => Ok(ConsoleCommand::Query(rest.to_string())),
            "search" => Ok(ConsoleCommand::Search),
            "reload" => Ok(ConsoleCommand::Reload),
            "show" | "" => Ok(ConsoleCommand::Show),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(format!("unknown command '{other}', type 'help' for a list")),
        }
    }
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let mut console =
        TicketConsole::mount(ctx.ticket_service.clone(), ctx.search_service.clone()).await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("TicketLens ({})\n\n", ctx.config.api_base_url).as_bytes())
        .await?;
    stdout.write_all(render_console(&console).as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match ConsoleCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                stdout.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };

        if matches!(command, ConsoleCommand::Submit | ConsoleCommand::Search)
            && !console.can_submit()
        {
            stdout.write_all(b"Busy, try again shortly.\n").await?;
            continue;
        }

        // Failures are recorded on the console and shown by the next render.
        let redraw = match command {
            ConsoleCommand::Title(title) => {
                console.set_title(title);
                false
            }
            ConsoleCommand::Description(description) => {
                console.set_description(description);
                false
            }
            ConsoleCommand::Query(query) => {
                console.set_query(query);
                false
            }
            ConsoleCommand::Submit => {
                let _ = console.submit_draft().await;
                true
            }
            ConsoleCommand::Search => {
                let _ = console.submit_query().await;
                true
            }
            ConsoleCommand::Reload => {
                let _ = console.reload().await;
                true
            }
            ConsoleCommand::Show => true,
            ConsoleCommand::Help => {
                stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
                false
            }
            ConsoleCommand::Quit => break,
        };

        if redraw {
            stdout.write_all(b"\n").await?;
            stdout.write_all(render_console(&console).as_bytes()).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}
