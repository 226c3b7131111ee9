//! Views and row actions.
//!
//! Which rewards are on screen is an explicit [`View`] passed to every listing and
//! rendering call. Tapping a row offers the actions from [`available_actions`], and
//! [`perform_action`] only carries out an action the row actually offers.

use crate::{
    core::reward,
    entities::reward::Model,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::fmt;
use tracing::{info, instrument};

/// Which partition of the rewards is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Rewards not in the trash
    #[default]
    Active,
    /// Soft-deleted rewards awaiting restore or permanent removal
    Trash,
}

impl View {
    /// The view a reward currently appears in.
    #[must_use]
    pub const fn of(reward: &Model) -> Self {
        if reward.deleted { Self::Trash } else { Self::Active }
    }

    /// Value of the `deleted` flag for rewards in this view.
    #[must_use]
    pub const fn shows_deleted(self) -> bool {
        matches!(self, Self::Trash)
    }

    /// The other view, as switched to by the header button.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Trash,
            Self::Trash => Self::Active,
        }
    }

    /// Page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Active => "My Rewards",
            Self::Trash => "Trash",
        }
    }

    /// New rewards can only be added from the active list.
    #[must_use]
    pub const fn allows_create(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Something the user can do to a single reward row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Flag an unused reward as redeemed
    MarkUsed,
    /// Clear the used flag
    MarkNew,
    /// Soft-delete
    MoveToTrash,
    /// Take out of the trash
    Restore,
    /// Remove for good
    DeletePermanently,
}

impl Action {
    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MarkUsed => "Mark as used",
            Self::MarkNew => "Mark as new",
            Self::MoveToTrash => "Move to trash",
            Self::Restore => "Restore",
            Self::DeletePermanently => "Delete permanently",
        }
    }

    /// Whether the menu should draw this entry as dangerous.
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::MoveToTrash | Self::DeletePermanently)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Actions offered for `reward` when it is tapped in `view`.
///
/// The active list offers the used toggle and the trash; the trash offers restore and
/// permanent deletion. Nothing can be permanently deleted from the active list.
#[must_use]
pub fn available_actions(reward: &Model, view: View) -> Vec<Action> {
    match view {
        View::Active => {
            let toggle = if reward.used {
                Action::MarkNew
            } else {
                Action::MarkUsed
            };
            vec![toggle, Action::MoveToTrash]
        }
        View::Trash => vec![Action::Restore, Action::DeletePermanently],
    }
}

/// Carries out `action` on reward `id` as seen from `view`.
///
/// Rejects with [`Error::ActionUnavailable`] when the reward is not in `view` (the
/// screen is stale) or the action is not on its menu. Returns the updated reward, or
/// `None` after a permanent delete.
#[instrument(skip(db))]
pub async fn perform_action(
    db: &DatabaseConnection,
    id: i64,
    action: Action,
    view: View,
) -> Result<Option<Model>> {
    let current = reward::get_reward_by_id(db, id)
        .await?
        .ok_or(Error::RewardNotFound { id })?;

    if View::of(&current) != view || !available_actions(&current, view).contains(&action) {
        return Err(Error::ActionUnavailable {
            action: action.label().to_string(),
            view: view.title().to_string(),
        });
    }

    info!("Performing '{}' on reward {}", action, id);
    let updated = match action {
        Action::MarkUsed => Some(reward::set_used(db, id, true).await?),
        Action::MarkNew => Some(reward::set_used(db, id, false).await?),
        Action::MoveToTrash => Some(reward::soft_delete(db, id).await?),
        Action::Restore => Some(reward::restore(db, id).await?),
        Action::DeletePermanently => {
            reward::hard_delete(db, id).await?;
            None
        }
    };
    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_view_helpers() {
        assert_eq!(View::default(), View::Active);
        assert_eq!(View::Active.toggled(), View::Trash);
        assert_eq!(View::Trash.toggled().toggled(), View::Trash);
        assert!(View::Trash.shows_deleted());
        assert!(!View::Active.shows_deleted());
        assert!(View::Active.allows_create());
        assert!(!View::Trash.allows_create());
        assert_eq!(View::Trash.to_string(), "Trash");
    }

    #[tokio::test]
    async fn test_available_actions_by_view() -> Result<()> {
        let db = setup_test_db().await?;
        let reward = create_test_reward(&db, "Buono Amazon", "Tablet Cucina").await?;

        assert_eq!(
            available_actions(&reward, View::Active),
            vec![Action::MarkUsed, Action::MoveToTrash]
        );

        let used = reward::set_used(&db, reward.id, true).await?;
        assert_eq!(
            available_actions(&used, View::Active),
            vec![Action::MarkNew, Action::MoveToTrash]
        );

        let trashed = reward::soft_delete(&db, reward.id).await?;
        let trash_actions = available_actions(&trashed, View::Trash);
        assert_eq!(
            trash_actions,
            vec![Action::Restore, Action::DeletePermanently]
        );
        assert!(
            !available_actions(&trashed, View::Active).contains(&Action::DeletePermanently)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_perform_action_walks_the_lifecycle() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let reward = create_test_reward(&db, "Sconto 10%", "Smartphone Papà").await?;

        let used = perform_action(&db, reward.id, Action::MarkUsed, View::Active)
            .await?
            .unwrap();
        assert!(used.used);

        let trashed = perform_action(&db, reward.id, Action::MoveToTrash, View::Active)
            .await?
            .unwrap();
        assert!(trashed.deleted);

        let restored = perform_action(&db, reward.id, Action::Restore, View::Trash)
            .await?
            .unwrap();
        assert!(!restored.deleted);
        assert!(restored.used);

        perform_action(&db, reward.id, Action::MoveToTrash, View::Active).await?;
        let gone = perform_action(&db, reward.id, Action::DeletePermanently, View::Trash).await?;
        assert!(gone.is_none());
        assert!(reward::get_reward_by_id(&db, reward.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_permanent_delete_rejected_outside_trash() -> Result<()> {
        let db = setup_test_db().await?;
        let reward = create_test_reward(&db, "Buono Amazon", "Tablet Cucina").await?;

        let result = perform_action(&db, reward.id, Action::DeletePermanently, View::Active).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ActionUnavailable { .. }
        ));

        // Claiming the trash view for an active reward is a stale screen
        let result = perform_action(&db, reward.id, Action::DeletePermanently, View::Trash).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ActionUnavailable { .. }
        ));

        assert_eq!(reward::get_reward_by_id(&db, reward.id).await?, Some(reward));
        Ok(())
    }

    #[tokio::test]
    async fn test_perform_action_rejects_wrong_toggle() -> Result<()> {
        let db = setup_test_db().await?;
        let reward = create_test_reward(&db, "Buono Amazon", "Tablet Cucina").await?;

        let result = perform_action(&db, reward.id, Action::MarkNew, View::Active).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ActionUnavailable { .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_perform_action_missing_reward() -> Result<()> {
        let db = setup_test_db().await?;
        let result = perform_action(&db, 404, Action::Restore, View::Trash).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::RewardNotFound { id: 404 }
        ));
        Ok(())
    }
}
