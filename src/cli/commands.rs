use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - named to-do lists in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the task store (overrides the config file)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of the default one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all lists and their progress
    Lists,
    /// Show the tasks in a list
    List(ListArgs),
    /// Add a task to the bottom of a list
    Add(AddArgs),
    /// Toggle a task between done and not done
    Done(IndexArgs),
    /// Delete a task
    Rm(IndexArgs),
    /// Create a list and switch to it
    NewList(NameArgs),
    /// Switch the selected list
    Select(NameArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// List to show (default: the selected list)
    #[arg(long)]
    pub list: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// List to add to (default: the selected list)
    #[arg(long)]
    pub list: Option<String>,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Task position, as shown by `tick list` (1-based)
    pub index: usize,
    /// List the task is in (default: the selected list)
    #[arg(long)]
    pub list: Option<String>,
}

#[derive(Args)]
pub struct NameArgs {
    /// List name
    pub name: String,
}
