//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{Player, PlayerList, PlayerUid};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let local_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let settings = Settings::load(Some(local_dir.as_path()))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Show { roster, reverse }) => show(&container, roster.as_deref(), *reverse),
        Some(Commands::Find { key, roster }) => find(&container, key, roster.as_deref()),
        Some(Commands::Nodes { roster }) => nodes(&container, roster.as_deref()),
        Some(Commands::Remove { keys, roster }) => remove(&container, keys, roster.as_deref()),
        Some(Commands::Check { roster }) => check(&container, roster.as_deref()),
        Some(Commands::Config { command }) => config(&container, command, &local_dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Roster from the command line, else the configured one.
fn resolve_roster(container: &ServiceContainer, roster: Option<&Path>) -> CliResult<PathBuf> {
    roster
        .map(Path::to_path_buf)
        .or_else(|| container.settings.roster.clone())
        .ok_or_else(|| {
            CliError::InvalidArgs("no roster given and none configured".to_string())
        })
}

fn load_list(container: &ServiceContainer, roster: Option<&Path>) -> CliResult<PlayerList> {
    let path = resolve_roster(container, roster)?;
    Ok(container.roster_service.load(&path)?)
}

/// Command-line uids go through the same normalization as stored ones.
fn normalize_key(key: &str) -> CliResult<String> {
    let uid = PlayerUid::parse(key).map_err(ApplicationError::from)?;
    Ok(uid.to_string())
}

#[instrument(level = "debug", skip(container))]
fn show(container: &ServiceContainer, roster: Option<&Path>, reverse: bool) -> CliResult<()> {
    let list = load_list(container, roster)?;
    let forward = !(reverse || container.settings.reverse);
    output::info(&list.display_with(&container.settings.format(), forward));
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn find(container: &ServiceContainer, key: &str, roster: Option<&Path>) -> CliResult<()> {
    let key = normalize_key(key)?;
    let list = load_list(container, roster)?;
    let player = lookup(&list, &key)?;
    output::info(&player.summary());
    Ok(())
}

/// First player with `key`, or `NotFound`.
fn lookup<'a>(list: &'a PlayerList, key: &str) -> CliResult<&'a Player> {
    list.find_node_with_key(key)
        .and_then(|id| list.get(id))
        .map(|node| node.player())
        .ok_or_else(|| CliError::NotFound(key.to_string()))
}

#[instrument(level = "debug", skip(container))]
fn nodes(container: &ServiceContainer, roster: Option<&Path>) -> CliResult<()> {
    let list = load_list(container, roster)?;
    if list.is_empty() {
        output::info(&container.settings.empty_message);
        return Ok(());
    }
    for (id, _) in &list {
        if let Some(line) = list.describe(id) {
            output::info(&line);
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn remove(container: &ServiceContainer, keys: &[String], roster: Option<&Path>) -> CliResult<()> {
    let keys = keys
        .iter()
        .map(|key| normalize_key(key))
        .collect::<CliResult<Vec<_>>>()?;
    let mut list = load_list(container, roster)?;
    for key in &keys {
        if list.delete_node_with_key(key) {
            output::success_detail(&format!("removed {}", key));
        } else {
            output::failure(&format!("no player with uid {}", key));
        }
    }
    let forward = !container.settings.reverse;
    output::info(&list.display_with(&container.settings.format(), forward));
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn check(container: &ServiceContainer, roster: Option<&Path>) -> CliResult<()> {
    let path = resolve_roster(container, roster)?;
    let list = container.roster_service.load(&path)?;
    output::success(&format!("{}: {} players", path.display(), list.len()));
    Ok(())
}

fn config(container: &ServiceContainer, command: &ConfigCommands, local_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            output::header("Config files (lowest to highest precedence)");
            match global_config_path() {
                Some(path) => output::detail(&format!(
                    "global: {} ({})",
                    path.display(),
                    exists_label(container, &path)
                )),
                None => output::detail("global: unavailable (no home directory)"),
            }
            let local = local_config_path(local_dir);
            output::detail(&format!(
                "local:  {} ({})",
                local.display(),
                exists_label(container, &local)
            ));
            output::detail("env:    PLAYERLIST_*");
            Ok(())
        }
        ConfigCommands::Init { global, force } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                local_config_path(local_dir)
            };
            if container.fs.exists(&path) && !*force {
                output::warning(&format!("{} already exists", path.display()));
                return Err(CliError::Usage("use --force to overwrite".to_string()));
            }
            container
                .fs
                .ensure_parent(&path)
                .with_path_context("create config directory", &path)?;
            container
                .fs
                .write(&path, &Settings::template())
                .with_path_context("write config", &path)?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn exists_label(container: &ServiceContainer, path: &Path) -> &'static str {
    if container.fs.exists(path) {
        "exists"
    } else {
        "not found"
    }
}
