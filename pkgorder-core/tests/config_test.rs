use std::fs;
use std::path::Path;

use pkgorder_core::config::{WorkspaceConfig, CONFIG_FILE};
use tempfile::TempDir;

#[test]
fn test_parse_config() {
    let toml = r#"
[workspace]
packages_dir = "libs"
internal_prefix = "@acme/"
exclude = ["legacy"]
"#;

    let config = WorkspaceConfig::parse(toml, CONFIG_FILE).unwrap();
    assert_eq!(config.packages_dir, "libs");
    assert_eq!(config.internal_prefix, "@acme/");
    assert_eq!(config.exclude, vec!["legacy".to_string()]);
}

#[test]
fn test_parse_config_defaults() {
    let config = WorkspaceConfig::parse("", CONFIG_FILE).unwrap();
    assert_eq!(config.packages_dir, "packages");
    assert_eq!(config.internal_prefix, "");
    assert!(config.exclude.is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let err = WorkspaceConfig::parse("[workspace\n", "custom.toml").unwrap_err();
    assert!(err.to_string().contains("custom.toml"));
}

#[test]
fn test_discover_walks_up() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(
        root.join(CONFIG_FILE),
        "[workspace]\ninternal_prefix = \"@acme/\"\n",
    )
    .unwrap();
    let nested = root.join("packages").join("ui").join("src");
    fs::create_dir_all(&nested).unwrap();

    let config = WorkspaceConfig::discover(&nested).unwrap();
    assert_eq!(config.internal_prefix, "@acme/");
    assert_eq!(
        config.resolve_packages_dir(Path::new("/elsewhere")),
        root.join("packages")
    );
}

#[test]
fn test_discover_stops_at_repository_root() {
    let temp_dir = TempDir::new().unwrap();
    let outer = temp_dir.path();
    fs::write(
        outer.join(CONFIG_FILE),
        "[workspace]\ninternal_prefix = \"@outer/\"\n",
    )
    .unwrap();
    let repo = outer.join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();

    let config = WorkspaceConfig::discover(&repo).unwrap();
    assert_eq!(config.internal_prefix, "");
    assert!(config.config_path.is_none());
    assert_eq!(config.resolve_packages_dir(&repo), repo.join("packages"));
}

#[test]
fn test_absolute_packages_dir_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let absolute = temp_dir.path().join("pkgs");
    let config = WorkspaceConfig {
        packages_dir: absolute.display().to_string(),
        ..WorkspaceConfig::default()
    };

    assert_eq!(config.resolve_packages_dir(Path::new("/ignored")), absolute);
}
