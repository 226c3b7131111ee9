//! CLI module - Command-line front end for the reward tracker.
//!
//! Each invocation performs one store operation and then prints the affected view,
//! the same act-then-reload cycle a table UI would run.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};

/// Premi - household reward tracker
/// Keeps track of time-limited prizes and how many days each has left
#[derive(Parser, Debug)]
#[command(name = "premi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run; lists active rewards when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Log a newly won reward
    #[command(alias = "a")]
    Add {
        /// What was won
        name: String,
        /// Device the reward belongs to
        device: String,
        /// Day it was won, as DD/MM/YYYY (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show rewards with their remaining days
    #[command(alias = "ls", alias = "l")]
    List {
        /// Show the trash instead of active rewards
        #[arg(long)]
        trash: bool,
    },

    /// Show what can be done with a reward
    Actions {
        /// Reward ID
        id: i64,
        /// Look at the reward as listed in the trash
        #[arg(long)]
        trash: bool,
    },

    /// Flip a reward between used and new
    #[command(alias = "use", alias = "u")]
    Toggle {
        /// Reward ID
        id: i64,
    },

    /// Move a reward to the trash
    #[command(alias = "rm")]
    Trash {
        /// Reward ID
        id: i64,
    },

    /// Bring a reward back from the trash
    Restore {
        /// Reward ID
        id: i64,
    },

    /// Permanently delete a reward that is already in the trash
    Purge {
        /// Reward ID
        id: i64,
    },

    /// Suggest reward names or devices for the add command
    Suggest {
        /// What to suggest
        #[arg(value_enum)]
        kind: SuggestKind,
        /// Text typed so far
        #[arg(default_value = "")]
        partial: String,
    },
}

/// Which add-form field to suggest values for
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SuggestKind {
    /// Reward names
    Names,
    /// Devices
    Devices,
}

pub use commands::*;
