use crate::context::CliContext;
use crate::output;

pub fn handle_show(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(ctx.board.to_snapshot());
    Ok(())
}

pub async fn handle_reset(ctx: &mut CliContext) -> anyhow::Result<()> {
    ctx.reset().await?;
    output::output_success(serde_json::json!({ "reset": ctx.key() }));
    Ok(())
}
