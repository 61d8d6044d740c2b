#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;
    use taskboard::commands::Cli;
    use test_context::{test_context, AsyncTestContext};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";

    /// A mock task API serving two tasks, one with a numeric id.
    struct CommandContext {
        server: MockServer,
        api_url: String,
    }

    impl AsyncTestContext for CommandContext {
        async fn setup() -> Self {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/tasks"))
                .and(header("x-api-key", API_KEY))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "tasks": [
                        {"id": 42, "title": "Rotate keys", "description": "", "status": "todo", "priority": "high"},
                        {"id": "t-2", "title": "Ship release", "description": "", "status": "done", "priority": "low"}
                    ]
                })))
                .mount(&server)
                .await;

            CommandContext {
                api_url: format!("{}/tasks", server.uri()),
                server,
            }
        }

        async fn teardown(self) {}
    }

    impl CommandContext {
        fn cli(&self, args: &[&str]) -> Cli {
            let mut argv = vec!["taskboard", "--api-url", self.api_url.as_str(), "--api-key", API_KEY];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv).unwrap()
        }

        async fn requests(&self, verb: &str) -> Vec<String> {
            self.server
                .received_requests()
                .await
                .unwrap()
                .into_iter()
                .filter(|r| r.method.as_str() == verb)
                .map(|r| r.url.path().to_string())
                .collect()
        }

        async fn expect_delete(&self, task_path: &str) {
            Mock::given(method("DELETE"))
                .and(path(task_path))
                .and(header("x-api-key", API_KEY))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
                .expect(1)
                .mount(&self.server)
                .await;
        }
    }

    #[tokio::test]
    async fn test_empty_settings_stop_before_any_request() {
        let server = MockServer::start().await;
        let api_url = format!("{}/tasks", server.uri());

        let missing_key = Cli::try_parse_from(["taskboard", "--api-url", api_url.as_str(), "--api-key", "", "list"]).unwrap();
        assert!(missing_key.run().await.is_err());

        let missing_url = Cli::try_parse_from(["taskboard", "--api-url", "", "--api-key", API_KEY, "list"]).unwrap();
        assert!(missing_url.run().await.is_err());

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_settings_are_rejected() {
        let bad_scheme = Cli::try_parse_from(["taskboard", "--api-url", "ftp://example.com/tasks", "--api-key", API_KEY, "list"]).unwrap();
        let err = bad_scheme.run().await.unwrap_err();
        assert!(err.to_string().contains("Configuration rejected"));

        let missing_file = Cli::try_parse_from([
            "taskboard",
            "--api-url",
            "https://example.com/tasks",
            "--api-key",
            API_KEY,
            "--env-file",
            "/nonexistent/taskboard.env",
            "list",
        ])
        .unwrap();
        assert!(missing_file.run().await.is_err());
    }

    #[test_context(CommandContext)]
    #[tokio::test]
    async fn test_list_fetches_once(ctx: &mut CommandContext) {
        ctx.cli(&["list", "--filter", "done"]).run().await.unwrap();
        assert_eq!(ctx.requests("GET").await, vec!["/tasks"]);
    }

    #[test_context(CommandContext)]
    #[tokio::test]
    async fn test_delete_unknown_id_is_refused(ctx: &mut CommandContext) {
        let err = ctx.cli(&["delete", "99", "--yes"]).run().await.unwrap_err();

        assert!(err.to_string().contains("99"));
        assert!(ctx.requests("DELETE").await.is_empty());
    }

    #[test_context(CommandContext)]
    #[tokio::test]
    async fn test_delete_with_yes_removes_numeric_id(ctx: &mut CommandContext) {
        ctx.expect_delete("/tasks/42").await;

        ctx.cli(&["delete", "42", "--yes"]).run().await.unwrap();

        assert_eq!(ctx.requests("DELETE").await, vec!["/tasks/42"]);
        // Initial fetch and the refetch after the delete
        assert_eq!(ctx.requests("GET").await.len(), 2);
    }

    #[test_context(CommandContext)]
    #[tokio::test]
    async fn test_delete_with_yes_removes_text_id(ctx: &mut CommandContext) {
        ctx.expect_delete("/tasks/t-2").await;

        ctx.cli(&["delete", "t-2", "--yes", "--filter", "done"]).run().await.unwrap();

        assert_eq!(ctx.requests("DELETE").await, vec!["/tasks/t-2"]);
    }

    #[test_context(CommandContext)]
    #[tokio::test]
    async fn test_delete_hidden_by_filter_still_allowed(ctx: &mut CommandContext) {
        ctx.expect_delete("/tasks/t-2").await;

        // The filter only shapes the board printed afterwards
        ctx.cli(&["delete", "t-2", "--yes", "--filter", "todo"]).run().await.unwrap();

        assert_eq!(ctx.requests("DELETE").await, vec!["/tasks/t-2"]);
    }
}
