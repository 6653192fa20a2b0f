use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let status = ctx.health_service.health().await?;
    println!("{} is {status}", ctx.config.api_base_url);
    Ok(())
}
