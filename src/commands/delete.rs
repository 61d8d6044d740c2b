use crate::api::TaskApi;
use crate::libs::{
    board::{DeleteOutcome, TaskBoard},
    filter::StatusFilter,
    messages::Message,
    prompt::{FixedAnswer, TerminalPrompt},
    task::TaskId,
    view::View,
};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    #[arg(required = true)]
    id: String,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Filter applied to the board shown afterwards
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    filter: StatusFilter,
}

pub async fn cmd(args: DeleteArgs, board: &TaskBoard<impl TaskApi>) -> Result<()> {
    board.set_filter(args.filter);
    board.mount().await;

    // Only tasks on the board can be deleted, with the id as the server sent it.
    let Some(task) = board.find(&TaskId::from(args.id.clone())) else {
        msg_bail_anyhow!(Message::TaskNotVisible(args.id));
    };

    let outcome = if args.yes {
        board.delete_task(&task.id, &FixedAnswer(true)).await
    } else {
        board.delete_task(&task.id, &TerminalPrompt).await
    };
    report(&task.id, outcome);

    View::print(&board.snapshot());
    Ok(())
}

/// Prints the user-facing result of a delete. Failures were already logged
/// by the board.
pub(crate) fn report(id: &TaskId, outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Cancelled => msg_info!(Message::TaskDeleteCancelled),
        DeleteOutcome::Deleted(_) => msg_success!(Message::TaskDeleted(id.to_string())),
        DeleteOutcome::Rejected(_) | DeleteOutcome::Failed => {}
    }
}
