use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_from_raw_defaults() {
    let config = Config::from_raw(PathBuf::from("/blog"), RawConfig::default());

    assert_eq!(config.templates_dir, PathBuf::from("/blog/_templates"));
    assert_eq!(config.drafts_dir, PathBuf::from("/blog/_drafts"));
    assert_eq!(config.posts_dir, PathBuf::from("/blog/_posts"));
    assert_eq!(config.date_format, "%Y-%m-%d");
}

#[test]
fn test_from_raw_with_overrides() {
    let raw: RawConfig = toml::from_str(
        r#"
        [paths]
        drafts = "content/drafts"
        posts = "content/posts"

        [post]
        date_format = "%d.%m.%Y"
        "#,
    )
    .unwrap();

    let config = Config::from_raw(PathBuf::from("/blog"), raw);

    assert_eq!(config.templates_dir, PathBuf::from("/blog/_templates"));
    assert_eq!(config.drafts_dir, PathBuf::from("/blog/content/drafts"));
    assert_eq!(config.posts_dir, PathBuf::from("/blog/content/posts"));
    assert_eq!(config.date_format, "%d.%m.%Y");
}

#[test]
fn test_raw_config_rejects_unknown_keys() {
    let result: std::result::Result<RawConfig, _> = toml::from_str(
        r#"
        [paths]
        draft = "typo"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_display_path_relative_to_root() {
    let config = Config::from_raw(PathBuf::from("/blog"), RawConfig::default());

    assert_eq!(
        config.display_path(Path::new("/blog/_drafts/post.md")),
        "_drafts/post.md"
    );
    // ルート外のパスはそのまま
    assert_eq!(config.display_path(Path::new("/etc/hosts")), "/etc/hosts");
}

#[test]
fn test_resolve_with_explicit_dir() {
    let dir = TempDir::new().unwrap();
    let config = Config::resolve(Some(dir.path())).unwrap();
    assert_eq!(config.root, dir.path());
}

#[test]
fn test_resolve_reads_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        "[paths]\ndrafts = \"wip\"\n",
    )
    .unwrap();

    let config = Config::resolve(Some(dir.path())).unwrap();
    assert_eq!(config.drafts_dir, dir.path().join("wip"));
}

#[test]
fn test_resolve_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "not valid toml [").unwrap();

    assert!(Config::resolve(Some(dir.path())).is_err());
}

#[test]
#[serial]
fn test_resolve_from_env_var() {
    let dir = TempDir::new().unwrap();
    std::env::set_var(ROOT_ENV_VAR, dir.path());

    let config = Config::resolve(None).unwrap();
    assert_eq!(config.root, dir.path());

    std::env::remove_var(ROOT_ENV_VAR);
}
