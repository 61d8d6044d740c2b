use crate::api::TaskApi;
use crate::libs::{board::TaskBoard, filter::StatusFilter, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    filter: StatusFilter,
}

pub async fn cmd(args: ListArgs, board: &TaskBoard<impl TaskApi>) -> Result<()> {
    board.set_filter(args.filter);

    View::print(&board.snapshot());
    board.mount().await;
    View::print(&board.snapshot());

    Ok(())
}
