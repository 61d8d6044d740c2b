use super::board::BoardSnapshot;
use super::filter::FilterCount;
use super::messages::Message;
use super::task::Task;
use prettytable::{row, Cell, Row, Table};

/// Terminal rendering of the board and its static screens.
///
/// `render_*` functions return plain text; `print_*` write to stdout and add
/// terminal colours to the priority badges.
pub struct View {}

impl View {
    pub fn render_config_error() -> String {
        format!("{}\n{}", Message::ConfigErrorTitle, Message::ConfigMissing)
    }

    pub fn render_loading() -> String {
        Message::LoadingTasks.to_string()
    }

    pub fn render_header() -> String {
        format!("{}\n{}", Message::BoardTitle, Message::BoardSubtitle)
    }

    /// `[All (3)]  Todo (1)  In Progress (1)  Done (1)`, active filter in brackets.
    pub fn render_filter_bar(counts: &[FilterCount]) -> String {
        counts
            .iter()
            .map(|c| {
                let label = format!("{} ({})", c.filter.label(), c.count);
                if c.active {
                    format!("[{}]", label)
                } else {
                    label
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// One row per task card: delete target, title and description,
    /// priority badge, assignee / due date, status.
    pub fn tasks(tasks: &[&Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "PRIORITY", "DETAILS", "STATUS"]);
        for task in tasks {
            let mut card = task.title.clone();
            if !task.description.is_empty() {
                card.push('\n');
                card.push_str(&task.description);
            }

            let mut details = Vec::new();
            if let Some(assignee) = task.assignee() {
                details.push(format!("👤 {}", assignee));
            }
            if let Some(due_date) = task.due_date() {
                details.push(format!("📅 {}", due_date));
            }

            table.add_row(Row::new(vec![
                Cell::new(&format!("🗑️ {}", task.id)),
                Cell::new(&card),
                Cell::new(task.priority.as_str()).style_spec(task.priority.color().style_spec()),
                Cell::new(&details.join("\n")),
                Cell::new(task.status.as_str()),
            ]));
        }

        table
    }

    /// The whole board as text, or the loading screen while loading.
    pub fn render(snapshot: &BoardSnapshot) -> String {
        if snapshot.loading {
            return Self::render_loading();
        }

        let visible = snapshot.visible();
        let body = if visible.is_empty() {
            Message::NoTasksFound.to_string()
        } else {
            Self::tasks(&visible).to_string()
        };

        format!(
            "{}\n\n{}\n\n{}",
            Self::render_header(),
            Self::render_filter_bar(&snapshot.counts()),
            body
        )
    }

    pub fn print(snapshot: &BoardSnapshot) {
        if snapshot.loading {
            println!("{}", Self::render_loading());
            return;
        }

        println!("{}\n", Self::render_header());
        println!("{}\n", Self::render_filter_bar(&snapshot.counts()));

        let visible = snapshot.visible();
        if visible.is_empty() {
            println!("{}", Message::NoTasksFound);
        } else {
            Self::tasks(&visible).printstd();
        }
    }

    pub fn print_config_error() {
        eprintln!("{}", Self::render_config_error());
    }
}
