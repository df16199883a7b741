use crate::context::CliContext;
use crate::output;
use triboard_domain::commands::{AddCard, DeleteCard, EditCard, MoveCard};
use triboard_domain::ColumnId;

pub async fn handle_add(ctx: &mut CliContext, column: ColumnId, text: String) -> anyhow::Result<()> {
    ctx.execute(AddCard { column, text })?;
    ctx.save().await?;
    let card_id = ctx.card_at(column, ctx.board.len(column).saturating_sub(1))?;
    output::output_success(ctx.view(card_id)?);
    Ok(())
}

pub async fn handle_edit(
    ctx: &mut CliContext,
    column: ColumnId,
    index: usize,
    text: String,
) -> anyhow::Result<()> {
    let card_id = ctx.card_at(column, index)?;
    ctx.execute(EditCard { card_id, text })?;
    ctx.save().await?;
    output::output_success(ctx.view(card_id)?);
    Ok(())
}

pub async fn handle_delete(ctx: &mut CliContext, column: ColumnId, index: usize) -> anyhow::Result<()> {
    let card_id = ctx.card_at(column, index)?;
    let deleted = ctx.view(card_id)?;
    ctx.execute(DeleteCard { card_id })?;
    ctx.save().await?;
    output::output_success(serde_json::json!({ "deleted": deleted }));
    Ok(())
}

/// Without `position` the card goes to the end of `to`.
pub async fn handle_move(
    ctx: &mut CliContext,
    from: ColumnId,
    index: usize,
    to: ColumnId,
    position: Option<usize>,
) -> anyhow::Result<()> {
    let card_id = ctx.card_at(from, index)?;
    let index = position.unwrap_or(usize::MAX);
    ctx.execute(MoveCard { card_id, to, index })?;
    ctx.save().await?;
    output::output_success(ctx.view(card_id)?);
    Ok(())
}
