use crate::{cli, error, info, spotify};

/// Fetches and prints the authenticated user's profile.
pub async fn profile() {
    let token = cli::require_token().await;

    let profile = match spotify::profile::get_profile(&token).await {
        Ok(profile) => profile,
        Err(e) => {
            error!("Failed to fetch profile: {}", e);
        }
    };

    info!("Display name: {}", profile.display_name);
    info!("User ID:      {}", profile.id);
    info!("Email:        {}", profile.email);
    info!("URI:          {}", profile.uri);
    info!("Link:         {}", profile.external_urls.spotify);
    info!("API href:     {}", profile.href);
    match profile.images.first() {
        Some(image) => info!("Avatar:       {}", image.url),
        None => info!("Avatar:       (no profile image)"),
    }
}
