//! 設定読み込みテスト

use movie_mania::config::{self, API_KEY_ENV};
use movie_mania::MovieManiaError;
use movie_mania_common::AppConfig;
use serial_test::serial;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"apiKey": "from-file", "defaultQuery": "alien", "discardStaleResponses": true}"#,
    )
    .unwrap();

    let config = config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.api_key, "from-file");
    assert_eq!(config.default_query, "alien");
    assert!(config.discard_stale_responses);
    assert_eq!(config.base_url, "https://www.omdbapi.com/");
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = config::load_from(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MovieManiaError::Io(_)));
}

#[test]
fn test_load_from_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"pageSize": 0}"#).unwrap();

    let err = config::load_from(&path).unwrap_err();
    assert!(matches!(err, MovieManiaError::Api(movie_mania_common::Error::Config(_))));
}

#[test]
#[serial]
fn test_env_overrides_api_key() {
    std::env::set_var(API_KEY_ENV, "  from-env ");
    let config = config::apply_env(AppConfig::with_api_key("from-file"));
    std::env::remove_var(API_KEY_ENV);

    assert_eq!(config.api_key, "from-env");
}

#[test]
#[serial]
fn test_blank_env_is_ignored() {
    std::env::set_var(API_KEY_ENV, "   ");
    let config = config::apply_env(AppConfig::with_api_key("from-file"));
    std::env::remove_var(API_KEY_ENV);

    assert_eq!(config.api_key, "from-file");
}

/// HOME を一時ディレクトリに差し替えて load() を呼ぶ
fn load_with_home(home: &std::path::Path, env_key: Option<&str>) -> movie_mania::Result<AppConfig> {
    let saved_home = std::env::var_os("HOME");
    std::env::set_var("HOME", home);
    match env_key {
        Some(key) => std::env::set_var(API_KEY_ENV, key),
        None => std::env::remove_var(API_KEY_ENV),
    }

    let result = config::load();

    std::env::remove_var(API_KEY_ENV);
    match saved_home {
        Some(value) => std::env::set_var("HOME", value),
        None => std::env::remove_var("HOME"),
    }
    result
}

#[test]
#[serial]
fn test_load_reads_home_config() {
    let home = tempdir().expect("Failed to create temp dir");
    let dir = home.path().join(".config").join("movie-mania");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.json"),
        r#"{"apiKey": "from-file", "defaultQuery": "alien", "pageSize": 5}"#,
    )
    .unwrap();

    let config = load_with_home(home.path(), None).expect("読み込み失敗");
    assert_eq!(config.api_key, "from-file");
    assert_eq!(config.default_query, "alien");
    assert_eq!(config.page_size, 5);

    let config = load_with_home(home.path(), Some("from-env")).expect("読み込み失敗");
    assert_eq!(config.api_key, "from-env");
    assert_eq!(config.default_query, "alien");
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let home = tempdir().expect("Failed to create temp dir");

    let config = load_with_home(home.path(), None).expect("読み込み失敗");
    assert_eq!(config, AppConfig::default());

    let config = load_with_home(home.path(), Some("from-env")).expect("読み込み失敗");
    assert_eq!(config.api_key, "from-env");
    assert_eq!(config.base_url, "https://www.omdbapi.com/");
}

#[test]
#[serial]
fn test_load_propagates_invalid_home_config() {
    let home = tempdir().expect("Failed to create temp dir");
    let dir = home.path().join(".config").join("movie-mania");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.json"), "{").unwrap();

    let err = load_with_home(home.path(), None).unwrap_err();
    assert!(matches!(err, MovieManiaError::Api(movie_mania_common::Error::Json(_))));
}

#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", MovieManiaError::MissingApiKey);
    assert!(display.contains("OMDB_API_KEY"));
    assert!(display.is_ascii());
}

#[test]
fn test_require_api_key() {
    assert!(matches!(
        config::require_api_key(&AppConfig::default()),
        Err(MovieManiaError::MissingApiKey)
    ));
    assert_eq!(
        config::require_api_key(&AppConfig::with_api_key("abc")).unwrap(),
        "abc"
    );
}

#[test]
fn test_error_display() {
    let errors = vec![
        MovieManiaError::Config("テスト設定エラー".to_string()),
        MovieManiaError::MissingApiKey,
        MovieManiaError::Api(movie_mania_common::Error::Http("API error: 500".to_string())),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}
