//! Unified error types for the reward tracker.
//!
//! Every store and classifier operation returns [`Result`]. Validation, date
//! parsing and missing-record failures happen before anything is written, so the
//! caller can show the message and leave the current view as it is.

use thiserror::Error;

/// Errors produced by the reward store, its configuration and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// A required text field was empty after trimming.
    #[error("The {field} field is required")]
    Validation {
        /// Name of the offending field (`"name"` or `"device"`)
        field: &'static str,
    },

    /// The won-on date could not be parsed as `DD/MM/YYYY`.
    #[error("Invalid date '{input}' (expected DD/MM/YYYY)")]
    DateParse {
        /// The raw text the user entered
        input: String,
    },

    /// The won-on date is so late that no calendar day exists one window after it.
    #[error("No expiry date exists {window_days} days after {won_on}")]
    ExpiryOutOfRange {
        /// The won-on date that was given
        won_on: chrono::NaiveDate,
        /// Length of the expiry window in days
        window_days: u64,
    },

    /// No reward exists with the given id.
    #[error("Reward {id} not found")]
    RewardNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// The action is not offered for this reward in the given view.
    #[error("Action '{action}' is not available for this reward in the {view} view")]
    ActionUnavailable {
        /// Label of the rejected action
        action: String,
        /// Title of the view the action was attempted from
        view: String,
    },

    /// Storage-layer failure. The stored data is unchanged and the call may be retried.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Settings or environment could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Filesystem failure while preparing the database location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the UI should show the message inline and let the user try again.
    ///
    /// Configuration and filesystem problems happen at startup and are not
    /// something a retry from the table view can fix.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config { .. } | Self::Io(_))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
