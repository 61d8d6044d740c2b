use super::delete::report;
use crate::api::TaskApi;
use crate::libs::{board::TaskBoard, filter::StatusFilter, messages::Message, prompt::TerminalPrompt, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// Interactive session: the board is fetched once on entry and again only
/// after a successful delete.
pub async fn cmd(board: &TaskBoard<impl TaskApi>) -> Result<()> {
    View::print(&board.snapshot());
    board.mount().await;

    loop {
        let snapshot = board.snapshot();
        View::print(&snapshot);

        let actions = vec![
            Message::BoardActionFilter.to_string(),
            Message::BoardActionDelete.to_string(),
            Message::BoardActionQuit.to_string(),
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectBoardAction.to_string())
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let counts = snapshot.counts();
                let labels: Vec<String> = counts.iter().map(|c| format!("{} ({})", c.filter.label(), c.count)).collect();
                let current = counts.iter().position(|c| c.active).unwrap_or(0);
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::SelectFilter.to_string())
                    .items(&labels)
                    .default(current)
                    .interact()?;
                let filter = StatusFilter::ALL[choice];
                board.set_filter(filter);
                msg_info!(Message::FilterChanged(filter.label().to_string()));
            }
            1 => {
                let visible = board.visible();
                if visible.is_empty() {
                    msg_info!(Message::NoTasksToDelete);
                    continue;
                }
                let items: Vec<String> = visible.iter().map(|t| format!("{}  {}", t.id, t.title)).collect();
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::SelectTaskToDelete.to_string())
                    .items(&items)
                    .interact()?;
                let id = visible[choice].id.clone();
                let outcome = board.delete_task(&id, &TerminalPrompt).await;
                report(&id, outcome);
            }
            _ => {
                msg_print!(Message::BoardClosed);
                return Ok(());
            }
        }
    }
}
