//! Tests for CLI parsing and command dispatch

use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use playerlist::cli::{execute_command, Cli, CliError, Commands};
use playerlist::exitcode;

fn roster(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("team.toml");
    std::fs::write(
        &path,
        r#"
[[players]]
uid = "20"
name = "John Smith"

[[players]]
uid = "23"
name = "Stephen Curry"
"#,
    )
    .unwrap();
    path
}

fn run(dir: &TempDir, args: &[&str]) -> Result<(), CliError> {
    let dir_arg = dir.path().to_string_lossy().to_string();
    let mut argv = vec!["playerlist", "-C", dir_arg.as_str()];
    argv.extend_from_slice(args);
    execute_command(&Cli::parse_from(argv))
}

#[test]
fn given_show_with_reverse_when_parsing_then_flag_is_set() {
    let cli = Cli::parse_from(["playerlist", "-dd", "show", "team.toml", "--reverse"]);
    assert_eq!(cli.debug, 2);
    assert!(matches!(
        cli.command,
        Some(Commands::Show { reverse: true, .. })
    ));
}

#[rstest]
#[case(&["show"])]
#[case(&["show", "--reverse"])]
#[case(&["nodes"])]
#[case(&["check"])]
#[case(&["find", "023"])]
#[case(&["remove", "20", "99"])]
fn given_valid_roster_when_running_command_then_succeeds(#[case] args: &[&str]) {
    let dir = TempDir::new().unwrap();
    let path = roster(&dir);
    let path = path.to_string_lossy().to_string();

    let mut full: Vec<&str> = args.to_vec();
    if args[0] == "remove" {
        full.extend(["--roster", path.as_str()]);
    } else {
        full.push(path.as_str());
    }

    run(&dir, &full).unwrap();
}

#[test]
fn given_unknown_uid_when_finding_then_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let path = roster(&dir).to_string_lossy().to_string();

    let err = run(&dir, &["find", "99", path.as_str()]).unwrap_err();

    assert!(matches!(err, CliError::NotFound(ref key) if key == "99"));
    assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
}

#[test]
fn given_malformed_uid_when_finding_then_exits_data_error() {
    let dir = TempDir::new().unwrap();
    let path = roster(&dir).to_string_lossy().to_string();

    let err = run(&dir, &["find", "abc", path.as_str()]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_no_roster_when_showing_then_usage_error() {
    let dir = TempDir::new().unwrap();

    let err = run(&dir, &["show"]).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_configured_roster_when_showing_then_uses_it() {
    let dir = TempDir::new().unwrap();
    roster(&dir);
    std::fs::write(dir.path().join(".playerlist.toml"), "roster = \"team.toml\"\n").unwrap();

    run(&dir, &["show"]).unwrap();
}

#[test]
fn given_local_config_exists_when_init_without_force_then_refuses() {
    let dir = TempDir::new().unwrap();

    run(&dir, &["config", "init"]).unwrap();
    assert!(dir.path().join(".playerlist.toml").is_file());

    let err = run(&dir, &["config", "init"]).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));

    run(&dir, &["config", "init", "--force"]).unwrap();
}
