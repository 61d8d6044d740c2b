#[cfg(test)]
mod tests {
    use taskboard::libs::board::BoardSnapshot;
    use taskboard::libs::filter::StatusFilter;
    use taskboard::libs::task::parse_task_list;
    use taskboard::libs::view::View;

    fn snapshot(filter: StatusFilter) -> BoardSnapshot {
        let tasks = parse_task_list(
            r#"{"tasks": [
                {"id": "t-1", "title": "Rotate keys", "description": "Quarterly rotation", "status": "todo",
                 "priority": "high", "assignee": "alice", "due_date": "2025-02-01"},
                {"id": "t-2", "title": "Ship release", "description": "", "status": "done", "priority": "low",
                 "assignee": "", "due_date": ""}
            ]}"#,
        )
        .unwrap();
        BoardSnapshot {
            loading: false,
            tasks,
            filter,
        }
    }

    #[test]
    fn test_loading_screen() {
        let mut loading = snapshot(StatusFilter::All);
        loading.loading = true;
        assert_eq!(View::render(&loading), "Loading tasks...");
    }

    #[test]
    fn test_config_error_screen() {
        let text = View::render_config_error();
        assert!(text.contains("Configuration Error"));
        assert!(text.contains("TASKBOARD_API_URL and TASKBOARD_API_KEY must be set"));
    }

    #[test]
    fn test_filter_bar_counts_and_active_marker() {
        let text = View::render(&snapshot(StatusFilter::Done));
        assert!(text.contains("All (2)  Todo (1)  In Progress (0)  [Done (1)]"));
    }

    #[test]
    fn test_cards_show_task_details() {
        let text = View::render(&snapshot(StatusFilter::All));
        assert!(text.contains("AgentCore Task Manager"));
        assert!(text.contains("Rotate keys"));
        assert!(text.contains("Quarterly rotation"));
        assert!(text.contains("👤 alice"));
        assert!(text.contains("📅 2025-02-01"));
        assert!(text.contains("t-1"));
        assert!(text.contains("high"));
        assert!(text.contains("Ship release"));
    }

    #[test]
    fn test_empty_assignee_and_due_date_are_hidden() {
        let text = View::render(&snapshot(StatusFilter::Done));
        assert!(text.contains("Ship release"));
        assert!(!text.contains("👤"));
        assert!(!text.contains("📅"));
    }

    #[test]
    fn test_hidden_tasks_are_not_rendered() {
        let text = View::render(&snapshot(StatusFilter::Todo));
        assert!(text.contains("Rotate keys"));
        assert!(!text.contains("Ship release"));
    }

    #[test]
    fn test_empty_view() {
        let text = View::render(&snapshot(StatusFilter::InProgress));
        assert!(text.contains("No tasks found"));
        assert!(!text.contains("Rotate keys"));
    }
}
