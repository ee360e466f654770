//! Notification command handlers.

use anyhow::{Context, Result};

use arena_core::config::Config;
use arena_core::format::format_timestamp;
use arena_core::session::SessionStore;

use super::client;

pub async fn list(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let notifications = api
        .notifications(config.per_page, None)
        .await
        .context("load notifications")?;

    if notifications.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    for n in &notifications {
        let marker = if n.read { " " } else { "●" };
        println!(
            "{marker} {}  {}  {}  — {}",
            n.id,
            n.title,
            n.body.clone().unwrap_or_default(),
            format_timestamp(n.created_at.as_deref()),
        );
    }
    Ok(())
}

pub async fn unread(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let count = api
        .unread_notification_count()
        .await
        .context("load unread count")?;
    println!("{count} unread");
    Ok(())
}

pub async fn read(config: &Config, store: &SessionStore, id: &str) -> Result<()> {
    let api = client(config, store)?;
    api.mark_notification_read(id)
        .await
        .context("mark notification as read")?;
    println!("Marked {id} as read.");
    Ok(())
}

pub async fn read_all(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    api.mark_all_notifications_read()
        .await
        .context("mark all notifications as read")?;
    println!("Marked all notifications as read.");
    Ok(())
}
