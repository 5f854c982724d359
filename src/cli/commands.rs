use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::model::task::TaskId;

#[derive(Parser)]
#[command(name = "tick", about = concat!("tick v", env!("CARGO_PKG_VERSION"), " - a personal task tracker"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks, optionally filtered
    List(ListArgs),
    /// Show one task in detail
    Show(ShowArgs),
    /// Edit a task's fields
    Edit(EditArgs),
    /// Mark a task completed
    Done(IdArgs),
    /// Mark a task not completed
    Undone(IdArgs),
    /// Delete a task permanently
    Rm(IdArgs),
    /// Move a task to a new position in the list
    Mv(MvArgs),
    /// Show tasks due today or overdue
    Due,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Category label
    #[arg(long)]
    pub category: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<NaiveDate>,
    /// Priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Keyword to match against title or category (substring)
    #[arg(long)]
    pub keyword: Option<String>,
    /// Filter by status (completed, pending)
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by category (exact match)
    #[arg(long)]
    pub category: Option<String>,
    /// Keep tasks due on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Keep tasks due on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Include completed tasks even when the config hides them
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task id
    pub id: TaskId,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: TaskId,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New category label
    #[arg(long)]
    pub category: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<NaiveDate>,
    /// Remove the due date
    #[arg(long, conflicts_with = "due")]
    pub clear_due: bool,
    /// New priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    pub id: TaskId,
}

#[derive(Args)]
pub struct MvArgs {
    /// Current position (1-based, as shown by `list`)
    pub from: usize,
    /// Target position (1-based)
    pub to: usize,
}
