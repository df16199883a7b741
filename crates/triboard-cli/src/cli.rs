use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triboard_domain::ColumnId;

#[derive(Parser)]
#[command(name = "triboard")]
#[command(about = "A three-column kanban board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Key-value store file (or set TRIBOARD_STORE env var)
    #[arg(long, value_name = "PATH", env = "TRIBOARD_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Key the board is stored under
    #[arg(long, value_name = "KEY", global = true)]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the board
    Show,
    /// Append a card to a column
    Add {
        /// column1, column2, column3 (or 1, 2, 3)
        #[arg(long)]
        column: ColumnId,
        text: String,
    },
    /// Replace the text of a card
    Edit {
        #[arg(long)]
        column: ColumnId,
        #[arg(long)]
        index: usize,
        text: String,
    },
    /// Delete a card
    Delete {
        #[arg(long)]
        column: ColumnId,
        #[arg(long)]
        index: usize,
    },
    /// Move a card, appending to the target column unless a position is given
    Move {
        #[arg(long)]
        from: ColumnId,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        to: ColumnId,
        /// Position among the target column's other cards
        #[arg(long)]
        position: Option<usize>,
    },
    /// Remove the stored board, including one that no longer parses
    Reset,
}
