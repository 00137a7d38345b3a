//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// In-memory player registry on a doubly-linked list
#[derive(Parser, Debug)]
#[command(name = "playerlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .playerlist.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the roster head to tail
    Show {
        /// Roster file (default: configured roster)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
        /// Print tail to head
        #[arg(short, long)]
        reverse: bool,
    },

    /// Look up a player by uid
    Find {
        /// Player uid
        key: String,
        /// Roster file (default: configured roster)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Show every node with its neighbors
    Nodes {
        /// Roster file (default: configured roster)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Remove players by uid and print what remains (file is not modified)
    Remove {
        /// Player uids
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
        /// Roster file (default: configured roster)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Validate a roster
    Check {
        /// Roster file (default: configured roster)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Create global config instead of a local one
        #[arg(short, long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
