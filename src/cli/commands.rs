use super::{Commands, SuggestKind};
use crate::{
    config::settings::Settings,
    core::{
        actions::{self, Action, View},
        listing::{self, RewardRow},
        reward, suggest,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::fmt::Write;

const HEADERS: [&str; 6] = ["ID", "Device", "Reward", "Days", "U", "Tier"];

/// Runs one command and returns the text to print.
///
/// Mutations are followed by a fresh listing of the view the user acted from.
/// `today` drives the remaining-days column.
pub async fn execute(
    command: Commands,
    db: &DatabaseConnection,
    settings: &Settings,
    today: NaiveDate,
) -> Result<String> {
    match command {
        Commands::Add { name, device, date } => {
            let date = date.unwrap_or_else(|| reward::format_display_date(today));
            let created = reward::create_reward_from_display(db, &name, &device, &date).await?;
            let header = format!(
                "Added '{}' for {} (expires {})",
                created.name,
                created.device,
                reward::format_display_date(created.expires_on)
            );
            with_listing(header, db, View::Active, today).await
        }
        Commands::List { trash } => {
            let view = if trash { View::Trash } else { View::Active };
            render_view(db, view, today).await
        }
        Commands::Actions { id, trash } => {
            let view = if trash { View::Trash } else { View::Active };
            let found = reward::get_reward_by_id(db, id)
                .await?
                .ok_or(Error::RewardNotFound { id })?;
            if View::of(&found) != view {
                return Ok(format!(
                    "Reward {id} is not in {}; it is listed under {}",
                    view,
                    View::of(&found)
                ));
            }
            Ok(render_actions(
                &found.name,
                &actions::available_actions(&found, view),
            ))
        }
        Commands::Toggle { id } => {
            let updated = reward::toggle_used(db, id).await?;
            let state = if updated.used { "used" } else { "new" };
            let header = format!("'{}' marked as {state}", updated.name);
            with_listing(header, db, View::of(&updated), today).await
        }
        Commands::Trash { id } => {
            let updated = actions::perform_action(db, id, Action::MoveToTrash, View::Active).await?;
            let header = updated.map_or_else(
                || format!("Reward {id} moved to the trash"),
                |r| format!("'{}' moved to the trash", r.name),
            );
            with_listing(header, db, View::Active, today).await
        }
        Commands::Restore { id } => {
            let updated = actions::perform_action(db, id, Action::Restore, View::Trash).await?;
            let header = updated.map_or_else(
                || format!("Reward {id} restored"),
                |r| format!("'{}' restored", r.name),
            );
            with_listing(header, db, View::Trash, today).await
        }
        Commands::Purge { id } => {
            actions::perform_action(db, id, Action::DeletePermanently, View::Trash).await?;
            let header = format!("Reward {id} permanently deleted");
            with_listing(header, db, View::Trash, today).await
        }
        Commands::Suggest { kind, partial } => {
            let values = match kind {
                SuggestKind::Names => suggest::suggest_names(db, settings, &partial).await?,
                SuggestKind::Devices => suggest::suggest_devices(db, settings, &partial).await?,
            };
            Ok(values.join("\n"))
        }
    }
}

async fn with_listing(
    header: String,
    db: &DatabaseConnection,
    view: View,
    today: NaiveDate,
) -> Result<String> {
    let listing = render_view(db, view, today).await?;
    Ok(format!("{header}\n\n{listing}"))
}

/// Renders the title and table of `view` as of `today`.
pub async fn render_view(db: &DatabaseConnection, view: View, today: NaiveDate) -> Result<String> {
    let rows = listing::load_rows(db, view, today).await?;
    let mut out = format!("{}\n", view.title());
    if rows.is_empty() {
        out.push_str("(empty)");
    } else {
        out.push_str(&render_table(&rows));
    }
    Ok(out)
}

/// Formats rows as an aligned text table.
#[must_use]
pub fn render_table(rows: &[RewardRow]) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            let mut name = row.name.clone();
            if row.tier.weight == crate::core::urgency::Weight::Bold {
                name = name.to_uppercase();
            }
            [
                row.id.to_string(),
                row.device.clone(),
                name,
                row.remaining_days.to_string(),
                row.used_marker.to_string(),
                row.tier.label(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for line in &cells {
        write_line(&mut out, line, &widths);
    }
    out.truncate(out.trim_end().len());
    out
}

fn write_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join("  ").trim_end());
}

fn render_actions(name: &str, available: &[Action]) -> String {
    let mut out = format!("Actions for: {name}\n");
    for action in available {
        let mark = if action.is_destructive() { " (!)" } else { "" };
        let _ = writeln!(out, "  - {action}{mark}");
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() -> Result<()> {
        let db = setup_test_db().await?;
        let settings = Settings::default();

        let out = execute(
            Commands::Add {
                name: "Buono Amazon".to_string(),
                device: "Tablet Cucina".to_string(),
                date: None,
            },
            &db,
            &settings,
            day(10),
        )
        .await?;

        assert!(out.starts_with("Added 'Buono Amazon' for Tablet Cucina (expires 15/03/2024)"));
        assert!(out.contains("My Rewards"));
        assert!(out.contains("light-info/black/normal"));
        Ok(())
    }

    #[tokio::test]
    async fn test_add_with_bad_date_writes_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let settings = Settings::default();

        let result = execute(
            Commands::Add {
                name: "Buono".to_string(),
                device: "Tablet".to_string(),
                date: Some("2024-03-10".to_string()),
            },
            &db,
            &settings,
            day(10),
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::DateParse { .. }));

        let out = execute(Commands::List { trash: false }, &db, &settings, day(10)).await?;
        assert_eq!(out, "My Rewards\n(empty)");
        Ok(())
    }

    #[tokio::test]
    async fn test_purge_only_from_trash() -> Result<()> {
        let db = setup_test_db().await?;
        let settings = Settings::default();
        let created = create_test_reward(&db, "Sconto 10%", "Smartphone Papà").await?;

        let result = execute(Commands::Purge { id: created.id }, &db, &settings, day(11)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ActionUnavailable { .. }
        ));

        execute(Commands::Trash { id: created.id }, &db, &settings, day(11)).await?;
        let out = execute(Commands::Purge { id: created.id }, &db, &settings, day(11)).await?;
        assert!(out.contains("permanently deleted"));
        assert!(out.ends_with("Trash\n(empty)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_actions_menu() -> Result<()> {
        let db = setup_test_db().await?;
        let settings = Settings::default();
        let created = create_test_reward(&db, "Buono Amazon", "Tablet Cucina").await?;

        let out = execute(
            Commands::Actions {
                id: created.id,
                trash: false,
            },
            &db,
            &settings,
            day(10),
        )
        .await?;
        assert_eq!(
            out,
            "Actions for: Buono Amazon\n  - Mark as used\n  - Move to trash (!)"
        );

        let out = execute(
            Commands::Actions {
                id: created.id,
                trash: true,
            },
            &db,
            &settings,
            day(10),
        )
        .await?;
        assert!(out.contains("listed under My Rewards"));
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_tells_identical_rewards_apart() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_reward(&db, "Buono Amazon", "Tablet").await?;
        let second = create_test_reward(&db, "Buono Amazon", "Tablet").await?;

        let out = render_view(&db, View::Active, day(10)).await?;
        let rows: Vec<&str> = out.lines().skip(3).collect();
        assert_eq!(rows.len(), 2);

        let mut ids: Vec<i64> = rows
            .iter()
            .map(|line| line.split_whitespace().next().unwrap().parse().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![first.id, second.id]);
        Ok(())
    }

    #[tokio::test]
    async fn test_restore_needs_a_trashed_reward() -> Result<()> {
        let db = setup_test_db().await?;
        let settings = Settings::default();
        let created = create_test_reward(&db, "Cinema 2x1", "Smart TV").await?;

        let result = execute(Commands::Restore { id: created.id }, &db, &settings, day(10)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ActionUnavailable { .. }
        ));
        assert_eq!(reward::get_reward_by_id(&db, created.id).await?, Some(created.clone()));

        execute(Commands::Trash { id: created.id }, &db, &settings, day(10)).await?;
        let result = execute(Commands::Trash { id: created.id }, &db, &settings, day(10)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ActionUnavailable { .. }
        ));

        let out = execute(Commands::Restore { id: created.id }, &db, &settings, day(10)).await?;
        assert!(out.starts_with("'Cinema 2x1' restored"));
        assert!(out.ends_with("Trash\n(empty)"));
        Ok(())
    }

    #[test]
    fn test_render_table_alignment() {
        let rows = vec![
            RewardRow {
                id: 1,
                device: "Tablet".to_string(),
                name: "Buono".to_string(),
                remaining_days: 0,
                used_marker: "",
                tier: crate::core::urgency::classify(0, false),
            },
            RewardRow {
                id: 2,
                device: "Smartphone Papà".to_string(),
                name: "Sconto".to_string(),
                remaining_days: 3,
                used_marker: listing::USED_MARKER,
                tier: crate::core::urgency::classify(3, true),
            },
        ];

        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Device           Reward  Days  U  Tier"));
        assert!(lines[2].starts_with("1   Tablet           BUONO   0"));
        assert!(lines[3].starts_with("2   Smartphone Papà  Sconto  3"));
        assert!(lines[3].contains("★"));
        assert!(lines[3].ends_with("neutral/muted-gray/normal"));
    }
}
