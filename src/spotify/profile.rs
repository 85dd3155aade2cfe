use reqwest::Client;

use crate::{config, spotify::ApiError, types::UserProfile};

/// Retrieves the authenticated user's profile.
///
/// Single request, not paginated. The response is decoded into the typed
/// [`UserProfile`] struct; a body that does not match it is a fetch error
/// rather than an undefined field access later on.
pub async fn get_profile(token: &str) -> Result<UserProfile, ApiError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(ApiError::Fetch)?
        .error_for_status()
        .map_err(ApiError::Fetch)?;

    let profile = response.json::<UserProfile>().await.map_err(ApiError::Fetch)?;
    Ok(profile)
}
