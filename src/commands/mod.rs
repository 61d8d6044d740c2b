//! Command-line entry points.
//!
//! Every subcommand starts by resolving the connection settings. If that
//! fails the configuration error screen is printed and nothing else runs.

pub mod board;
pub mod delete;
pub mod list;

use crate::api::TaskClient;
use crate::libs::{board::TaskBoard, config::Config, messages::Message, view::View};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show the task board once")]
    List(list::ListArgs),
    #[command(about = "Delete a task and show the refreshed board", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Browse, filter and delete tasks interactively")]
    Board,
}

/// Connection flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Task collection URL [env: TASKBOARD_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// API key sent as `x-api-key` [env: TASKBOARD_API_KEY]
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Load variables from this file instead of `./.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
}

impl ConnectionArgs {
    /// Runs the configuration guard. On failure the static error screen is
    /// printed and the returned error carries only the reason.
    pub fn config(&self) -> Result<Config> {
        let resolved = Config::load_env_file(self.env_file.as_deref())
            .and_then(|_| Config::resolve(self.api_url.clone(), self.api_key.clone()));

        resolved.map_err(|err| {
            View::print_config_error();
            msg_error_anyhow!(Message::ConfigInvalid(err.to_string()))
        })
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: ConnectionArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    /// Runs already parsed arguments.
    pub async fn run(self) -> Result<()> {
        let config = self.connection.config()?;
        let board = TaskBoard::new(TaskClient::new(&config));

        let result = match self.command {
            Commands::List(args) => list::cmd(args, &board).await,
            Commands::Delete(args) => delete::cmd(args, &board).await,
            Commands::Board => board::cmd(&board).await,
        };

        board.unmount();
        result
    }
}
