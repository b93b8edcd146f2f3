use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActivityArgs, LogsArgs, MemoryArgs, RunArgs, ToggleArgs};

/// Operator dashboard for a workspace of markdown task files
///
/// Homie aggregates the checkboxes found in TODO.md and TASKS.md files into a
/// progress board, toggles single checkboxes, and runs a small whitelist of
/// maintenance commands behind a per-action cooldown. `serve` exposes the same
/// operations as an MCP server on stdio.
#[derive(Parser)]
#[command(version, about, name = "homie")]
pub struct Args {
    /// Workspace root containing the task files. Defaults to the current
    /// directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Dashboard directory holding the manifest and its own task file.
    /// Defaults to <workspace>/dashboard
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Project manifest. Defaults to <base-dir>/projects.json
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// JSON config file. Defaults to $XDG_CONFIG_HOME/homie/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seconds an action stays unavailable after it ran
    #[arg(long, global = true)]
    pub cooldown: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print JSON responses instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands; `board` runs when none is given
#[derive(Subcommand)]
pub enum Commands {
    /// Show the task board
    #[command(alias = "b")]
    Board,
    /// Set or clear one checkbox
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// List actions and their cooldowns
    #[command(alias = "a")]
    Actions,
    /// Run a whitelisted action
    #[command(alias = "r")]
    Run(RunArgs),
    /// Show recent logs of a managed service
    #[command(alias = "l")]
    Logs(LogsArgs),
    /// Show one day of the memory journal
    #[command(alias = "m")]
    Memory(MemoryArgs),
    /// Show classified recent journal activity
    Activity(ActivityArgs),
    /// Show errors and warnings from the newest journal day
    #[command(alias = "i")]
    Issues,
    /// Start the MCP server
    Serve,
}
