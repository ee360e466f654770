//! Profile-save flow.
//!
//! Two-step when a new avatar was selected: the image is uploaded first and
//! only the resulting hosted URL goes into the profile-update request. A
//! failed upload aborts the flow; the update is never attempted.

use std::path::PathBuf;

use arena_types::{UpdateProfileRequest, User};

use crate::api::{ApiClient, ProgressFn};
use crate::validate::{validate_full_name, validate_phone};

use super::FlowError;

/// Pending profile edits collected from the form.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub full_name: String,
    pub ign: Option<String>,
    pub phone: Option<String>,
    /// Hosted URL currently on the profile.
    pub current_avatar_url: Option<String>,
    /// Newly selected local image, if any.
    pub new_avatar: Option<PathBuf>,
}

/// Validates and saves a profile edit, returning the updated user.
pub async fn save_profile(
    api: &ApiClient,
    edit: &ProfileEdit,
    progress: Option<ProgressFn>,
) -> Result<User, FlowError> {
    validate_full_name(&edit.full_name)?;
    if let Some(phone) = edit.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        validate_phone(phone)?;
    }

    let avatar_url = match &edit.new_avatar {
        Some(path) => {
            tracing::info!(path = %path.display(), "uploading new avatar");
            Some(api.upload_avatar(path, progress).await?)
        }
        None => edit.current_avatar_url.clone(),
    };

    let request = UpdateProfileRequest {
        full_name: edit.full_name.trim().to_string(),
        ign: edit
            .ign
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(ToString::to_string),
        avatar_url,
    };
    let user = api.update_profile(&request).await?;
    Ok(user)
}
