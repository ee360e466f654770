//! Profile command handlers.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use arena_core::api::ProgressFn;
use arena_core::config::Config;
use arena_core::flows::{self, ProfileEdit};
use arena_core::format::format_amount;
use arena_core::session::SessionStore;

use super::client;

pub async fn show(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let user = api.me().await.context("load profile")?;

    println!("{}", user.display_name());
    println!("Username:  {}", user.username);
    println!("Email:     {}", user.email.unwrap_or_default());
    println!("Phone:     {}", user.phone.unwrap_or_default());
    println!("IGN:       {}", user.ign.unwrap_or_default());
    println!("Referral:  {}", user.referral_code.unwrap_or_default());
    println!(
        "Balance:   ৳{}",
        format_amount(user.wallet.map_or(0.0, |w| w.balance))
    );
    Ok(())
}

/// Updates the profile; unset flags keep the current server values. A new
/// avatar is uploaded first and only its hosted URL rides the update.
pub async fn update(
    config: &Config,
    store: &SessionStore,
    full_name: Option<String>,
    ign: Option<String>,
    avatar: Option<PathBuf>,
) -> Result<()> {
    let api = client(config, store)?;
    let user = api.me().await.context("load current profile")?;

    let edit = ProfileEdit {
        full_name: full_name.unwrap_or_else(|| user.display_name().to_string()),
        ign: ign.or_else(|| user.ign.clone()),
        phone: user.phone.clone(),
        current_avatar_url: user.avatar_url.clone(),
        new_avatar: avatar,
    };

    let progress: Option<ProgressFn> = edit.new_avatar.as_ref().map(|_| progress_bar());
    let updated = flows::save_profile(&api, &edit, progress)
        .await
        .context("profile update failed")?;

    println!("Profile updated successfully!");
    let name = updated.display_name().to_string();
    println!("{} (IGN: {})", name, updated.ign.unwrap_or_default());
    Ok(())
}

pub async fn change_password(
    config: &Config,
    store: &SessionStore,
    current: &str,
    new: &str,
) -> Result<()> {
    arena_core::validate::validate_password(new)?;

    let api = client(config, store)?;
    api.change_password(&arena_types::ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
    .await
    .context("change password")?;
    println!("Password changed.");
    Ok(())
}

/// Stderr progress line for uploads.
pub fn progress_bar() -> ProgressFn {
    Arc::new(|pct| {
        eprint!("\rUploading… {pct:>3}%");
        if pct >= 100 {
            eprintln!();
        }
        let _ = std::io::stderr().flush();
    })
}
