use reqwest::Client;

use crate::{
    config,
    spotify::ApiError,
    types::{AddTracksRequest, AddTracksResponse},
};

/// Copies the selected tracks into the target playlist.
///
/// Issues one POST against `/playlists/{id}/tracks` per selected URI, in
/// selection order, awaiting each response before sending the next. Each
/// request carries a single-element `uris` list; the request body models a
/// list, so batching would be a body-level change only.
///
/// # Errors
///
/// Returns [`ApiError::Transfer`] on the first failing request; tracks after
/// the failed one are not sent. There is no retry and no error aggregation.
pub async fn transfer_tracks(
    token: &str,
    uris: &[String],
    target_playlist_id: &str,
) -> Result<usize, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = target_playlist_id
    );

    let client = Client::new();
    for uri in uris {
        let body = AddTracksRequest {
            uris: vec![uri.clone()],
        };

        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Transfer)?
            .error_for_status()
            .map_err(ApiError::Transfer)?;

        let _snapshot = response
            .json::<AddTracksResponse>()
            .await
            .map_err(ApiError::Transfer)?;
    }

    Ok(uris.len())
}
