//! Core business logic - framework-agnostic reward lifecycle and urgency rules.

/// Views, row actions and action dispatch
pub mod actions;
/// Table rows for a view, classified against a given day
pub mod listing;
/// Reward store: creation, listing and lifecycle transitions
pub mod reward;
/// Add-form suggestions for names and devices
pub mod suggest;
/// Remaining-days computation and urgency tiers
pub mod urgency;
