#[cfg(test)]
mod tests {
    use parking_lot::{const_mutex, Mutex, MutexGuard};
    use std::io::Write;
    use taskboard::libs::config::{Config, API_KEY_VAR, API_URL_VAR};
    use taskboard::libs::error::BoardError;
    use tempfile::NamedTempFile;
    use test_context::{test_context, TestContext};

    /// Tests in this file mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = const_mutex(());

    /// Holds the environment lock and starts every test with both variables unset.
    struct EnvContext {
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for EnvContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            std::env::remove_var(API_URL_VAR);
            std::env::remove_var(API_KEY_VAR);
            EnvContext { _guard: guard }
        }

        fn teardown(self) {
            std::env::remove_var(API_URL_VAR);
            std::env::remove_var(API_KEY_VAR);
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config::new("https://api.example.com/prod/tasks", "key-123").unwrap();
        assert_eq!(config.api_url().as_str(), "https://api.example.com/prod/tasks");
        assert_eq!(config.api_key(), "key-123");
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let err = Config::new("", "key-123").unwrap_err();
        assert!(matches!(err, BoardError::MissingConfig(API_URL_VAR)));
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let err = Config::new("https://api.example.com/tasks", "").unwrap_err();
        assert!(matches!(err, BoardError::MissingConfig(API_KEY_VAR)));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(Config::new("not a url", "k"), Err(BoardError::InvalidUrl { .. })));
        assert!(matches!(Config::new("ftp://example.com/tasks", "k"), Err(BoardError::InvalidUrl { .. })));
    }

    #[test]
    fn test_key_must_be_a_header_value() {
        let err = Config::new("https://api.example.com/tasks", "bad\nkey").unwrap_err();
        assert!(matches!(err, BoardError::InvalidApiKey(_)));
        assert!(err.is_config());
    }

    #[test_context(EnvContext)]
    #[test]
    fn test_resolve_from_environment(_ctx: &mut EnvContext) {
        std::env::set_var(API_URL_VAR, "https://env.example.com/tasks");
        std::env::set_var(API_KEY_VAR, "env-key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url().as_str(), "https://env.example.com/tasks");
        assert_eq!(config.api_key(), "env-key");
    }

    #[test_context(EnvContext)]
    #[test]
    fn test_flags_override_environment(_ctx: &mut EnvContext) {
        std::env::set_var(API_URL_VAR, "https://env.example.com/tasks");
        std::env::set_var(API_KEY_VAR, "env-key");

        let config = Config::resolve(Some("https://flag.example.com/tasks".to_string()), None).unwrap();
        assert_eq!(config.api_url().as_str(), "https://flag.example.com/tasks");
        assert_eq!(config.api_key(), "env-key");
    }

    #[test_context(EnvContext)]
    #[test]
    fn test_empty_environment_value_counts_as_missing(_ctx: &mut EnvContext) {
        std::env::set_var(API_URL_VAR, "https://env.example.com/tasks");
        std::env::set_var(API_KEY_VAR, "");

        assert!(matches!(Config::from_env(), Err(BoardError::MissingConfig(API_KEY_VAR))));
    }

    #[test_context(EnvContext)]
    #[test]
    fn test_nothing_set(_ctx: &mut EnvContext) {
        assert!(matches!(Config::from_env(), Err(BoardError::MissingConfig(API_URL_VAR))));
    }

    #[test_context(EnvContext)]
    #[test]
    fn test_env_file_fills_missing_variables(_ctx: &mut EnvContext) {
        std::env::set_var(API_KEY_VAR, "already-set");

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}=https://file.example.com/tasks", API_URL_VAR).unwrap();
        writeln!(file, "{}=from-file", API_KEY_VAR).unwrap();

        Config::load_env_file(Some(file.path())).unwrap();
        let config = Config::from_env().unwrap();

        assert_eq!(config.api_url().as_str(), "https://file.example.com/tasks");
        // Existing variables are not overridden.
        assert_eq!(config.api_key(), "already-set");
    }

    #[test_context(EnvContext)]
    #[test]
    fn test_missing_env_file_is_an_error(_ctx: &mut EnvContext) {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_env_file(Some(&dir.path().join("missing.env"))).unwrap_err();
        assert!(matches!(err, BoardError::EnvFile { .. }));
        assert!(err.is_config());
    }
}
