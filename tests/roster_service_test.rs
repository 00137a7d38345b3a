//! Tests for RosterService

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use playerlist::application::services::RosterService;
use playerlist::application::ApplicationError;
use playerlist::domain::DomainError;
use playerlist::infrastructure::traits::RealFileSystem;

/// Helper to create a roster file for testing
fn create_roster(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write roster file");
    path
}

fn service() -> RosterService {
    RosterService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_roster_when_loading_then_players_follow_file_order() {
    let temp = TempDir::new().unwrap();
    let roster = create_roster(
        &temp,
        "team.toml",
        r#"
[[players]]
uid = "20"
name = "John Smith"

[[players]]
uid = "23"
name = "Stephen Curry"

[[players]]
uid = "42"
name = "Douglas Adams"
"#,
    );

    let list = service().load(&roster).unwrap();

    assert_eq!(list.keys(), vec!["20", "23", "42"]);
    assert_eq!(
        list.display(false),
        "42'Douglas Adams' -> 23'Stephen Curry' -> 20'John Smith'"
    );
}

#[test]
fn given_missing_roster_when_loading_then_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let err = service().load(&missing).unwrap_err();

    assert!(matches!(err, ApplicationError::RosterNotFound(p) if p == missing));
}

#[test]
fn given_malformed_toml_when_loading_then_reports_format_error() {
    let temp = TempDir::new().unwrap();
    let roster = create_roster(&temp, "bad.toml", "[[players]\nuid = ");

    let err = service().load(&roster).unwrap_err();

    assert!(matches!(err, ApplicationError::RosterFormat { .. }));
}

#[test]
fn given_entry_without_name_when_loading_then_reports_format_error() {
    let temp = TempDir::new().unwrap();
    let roster = create_roster(&temp, "partial.toml", "[[players]]\nuid = \"1\"\n");

    let err = service().load(&roster).unwrap_err();

    assert!(matches!(err, ApplicationError::RosterFormat { .. }));
}

#[test]
fn given_blank_name_when_loading_then_reports_entry_index() {
    let temp = TempDir::new().unwrap();
    let roster = create_roster(
        &temp,
        "blank.toml",
        r#"
[[players]]
uid = "1"
name = "Amy"

[[players]]
uid = "2"
name = "   "
"#,
    );

    let err = service().load(&roster).unwrap_err();

    match err {
        ApplicationError::InvalidEntry { index, source, .. } => {
            assert_eq!(index, 1);
            assert!(matches!(source, DomainError::InvalidName(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn given_position_out_of_range_when_loading_then_reports_entry() {
    let temp = TempDir::new().unwrap();
    let roster = create_roster(
        &temp,
        "range.toml",
        r#"
[[players]]
uid = "1"
name = "Amy"
position = 3
"#,
    );

    let err = service().load(&roster).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::InvalidEntry {
            index: 0,
            source: DomainError::PositionOutOfRange { position: 3, len: 0 },
            ..
        }
    ));
}

#[test]
fn given_positions_when_loading_then_inserts_at_index() {
    let temp = TempDir::new().unwrap();
    let roster = create_roster(
        &temp,
        "positions.toml",
        r#"
[[players]]
uid = "2"
name = "Bea"

[[players]]
uid = "1"
name = "Amy"
position = 0

[[players]]
uid = "3"
name = "Cy"
position = 2
"#,
    );

    let list = service().load(&roster).unwrap();

    assert_eq!(list.keys(), vec!["1", "2", "3"]);
}
