//! Integration tests for Settings layered loading.
//!
//! Every layer is injected: the global file lives in the temp dir and the
//! environment is an explicit map, so the host's config never leaks in.

use std::fs;
use std::path::{Path, PathBuf};

use config::Map;
use tempfile::TempDir;

use playerlist::application::ApplicationError;
use playerlist::config::{local_config_path, Settings};
use playerlist::domain::{DEFAULT_SEPARATOR, EMPTY_LIST_MESSAGE};

fn global_path(dir: &TempDir) -> PathBuf {
    dir.path().join("global").join("playerlist.toml")
}

fn load_isolated(dir: &TempDir) -> Result<Settings, ApplicationError> {
    load_with_env(dir, &[])
}

fn load_with_env(dir: &TempDir, vars: &[(&str, &str)]) -> Result<Settings, ApplicationError> {
    let env: Map<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::load_layered(Some(&global_path(dir)), Some(dir.path()), Some(env))
}

fn write_global(dir: &TempDir, content: &str) {
    let path = global_path(dir);
    fs::create_dir_all(path.parent().unwrap_or(Path::new("."))).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = load_isolated(&dir).expect("load settings");

    assert_eq!(settings.empty_message, EMPTY_LIST_MESSAGE);
    assert_eq!(settings.separator, DEFAULT_SEPARATOR);
}

#[test]
fn given_local_config_when_load_then_overrides_fields_it_sets() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
separator = " | "
reverse = true
"#,
    )
    .unwrap();

    let settings = load_isolated(&dir).expect("load settings");

    assert_eq!(settings.separator, " | ");
    assert!(settings.reverse);
    assert_eq!(settings.empty_message, EMPTY_LIST_MESSAGE);
}

#[test]
fn given_relative_roster_in_local_config_when_load_then_resolves_against_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "roster = \"team.toml\"\n").unwrap();

    let settings = load_isolated(&dir).expect("load settings");

    assert_eq!(settings.roster, Some(dir.path().join("team.toml")));
}

#[test]
fn given_absolute_roster_in_local_config_when_load_then_keeps_it() {
    let dir = TempDir::new().unwrap();
    let roster = dir.path().join("elsewhere").join("team.toml");
    fs::write(
        local_config_path(dir.path()),
        format!("roster = {:?}\n", roster.to_string_lossy()),
    )
    .unwrap();

    let settings = load_isolated(&dir).expect("load settings");

    assert_eq!(settings.roster, Some(PathBuf::from(&roster)));
}

#[test]
fn given_invalid_local_config_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "reverse = \"maybe\"\n").unwrap();

    let err = load_isolated(&dir).unwrap_err();

    assert!(err.to_string().starts_with("config error:"), "{}", err);
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins() {
    let dir = TempDir::new().unwrap();
    write_global(&dir, "separator = \" | \"\nempty_message = \"nobody\"\n");
    fs::write(local_config_path(dir.path()), "separator = \", \"\n").unwrap();

    let settings = load_isolated(&dir).expect("load settings");

    assert_eq!(settings.separator, ", ");
    assert_eq!(settings.empty_message, "nobody");
}

#[test]
fn given_env_overrides_when_load_then_env_wins_over_files() {
    let dir = TempDir::new().unwrap();
    write_global(&dir, "separator = \" | \"\n");
    fs::write(local_config_path(dir.path()), "reverse = false\n").unwrap();

    let settings = load_with_env(
        &dir,
        &[
            ("PLAYERLIST_SEPARATOR", " <> "),
            ("PLAYERLIST_REVERSE", "true"),
            ("PLAYERLIST_ROSTER", "/srv/team.toml"),
            ("OTHER_SEPARATOR", "ignored"),
        ],
    )
    .expect("load settings");

    assert_eq!(settings.separator, " <> ");
    assert!(settings.reverse);
    assert_eq!(settings.roster, Some(PathBuf::from("/srv/team.toml")));
    assert_eq!(settings.empty_message, EMPTY_LIST_MESSAGE);
}

#[test]
fn given_settings_when_rendering_toml_then_roundtrips_fields() {
    let settings = Settings {
        separator: ", ".into(),
        ..Default::default()
    };

    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, settings);
}
