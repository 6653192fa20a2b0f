use clap::Args;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::view::render_results;
use crate::workflow::TicketConsole;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query; words are joined with single spaces.
    pub query: Vec<String>,
}

pub async fn run(ctx: &AppContext, args: SearchArgs) -> AppResult<()> {
    let mut console = TicketConsole::new(ctx.ticket_service.clone(), ctx.search_service.clone());
    console.set_query(args.query.join(" "));
    console.submit_query().await?;

    print!("{}", render_results(console.results()));
    Ok(())
}
