use clap::{Args, Subcommand};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::view::render_tickets;
use crate::workflow::TicketConsole;

#[derive(Args, Debug, Clone)]
pub struct TicketsArgs {
    #[command(subcommand)]
    pub command: TicketsCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TicketsCommand {
    /// List every ticket known to the service.
    List,
    /// Create a ticket, then list the refreshed tickets.
    Create {
        #[arg(short, long, default_value = "")]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

pub async fn run(ctx: &AppContext, command: TicketsCommand) -> AppResult<()> {
    let mut console = TicketConsole::new(ctx.ticket_service.clone(), ctx.search_service.clone());

    match command {
        TicketsCommand::List => console.reload().await?,
        TicketsCommand::Create { title, description } => {
            console.set_title(title);
            console.set_description(description);
            console.submit_draft().await?;
            println!("Ticket created.");
        }
    }

    print!("{}", render_tickets(console.tickets()));
    Ok(())
}
