pub mod board;
pub mod card;

use crate::cli::Commands;
use crate::context::CliContext;

pub async fn handle(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Show => board::handle_show(ctx),
        Commands::Add { column, text } => card::handle_add(ctx, column, text).await,
        Commands::Edit {
            column,
            index,
            text,
        } => card::handle_edit(ctx, column, index, text).await,
        Commands::Delete { column, index } => card::handle_delete(ctx, column, index).await,
        Commands::Move {
            from,
            index,
            to,
            position,
        } => card::handle_move(ctx, from, index, to, position).await,
        Commands::Reset => board::handle_reset(ctx).await,
    }
}
