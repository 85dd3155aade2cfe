use reqwest::Client;

use crate::{
    config,
    spotify::ApiError,
    types::{Playlist, PlaylistsPage, Track, TracksPage},
};

/// Upper bound on pages fetched for one listing. A listing that has not
/// terminated by then aborts with [`ApiError::PageLimit`] instead of polling
/// the endpoint forever.
pub const MAX_PAGES: u32 = 100;

/// Retrieves all of the authenticated user's playlists.
///
/// Issues sequential GET requests against `/me/playlists`, advancing the
/// offset by the configured page limit, and accumulates the items in request
/// order. The aggregation terminates on the first empty page.
///
/// # Errors
///
/// - [`ApiError::Fetch`] on a non-success status or undecodable body; the
///   whole listing aborts, no partial result is returned
/// - [`ApiError::PageLimit`] when [`MAX_PAGES`] pages did not reach the end
pub async fn get_playlists(token: &str) -> Result<Vec<Playlist>, ApiError> {
    let limit = config::playlist_page_limit();
    let client = Client::new();
    let mut playlists: Vec<Playlist> = Vec::new();
    let mut offset: u64 = 0;

    for _ in 0..MAX_PAGES {
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = limit,
            offset = offset
        );

        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::Fetch)?
            .error_for_status()
            .map_err(ApiError::Fetch)?;

        let page = response
            .json::<PlaylistsPage>()
            .await
            .map_err(ApiError::Fetch)?;

        if page.items.is_empty() {
            return Ok(playlists);
        }
        playlists.extend(page.items);
        offset += limit;
    }

    Err(ApiError::PageLimit(MAX_PAGES))
}

/// Retrieves all tracks of one playlist.
///
/// Issues sequential GET requests against `/playlists/{id}/tracks`, advancing
/// the offset by the number of items just received. Terminates on an empty
/// page or, because the endpoint reports a total, as soon as the accumulated
/// offset reaches it; the total check guards against an endpoint that never
/// returns a fully empty page.
pub async fn get_tracks(token: &str, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
    let client = Client::new();
    let mut tracks: Vec<Track> = Vec::new();
    let mut offset: u64 = 0;

    for _ in 0..MAX_PAGES {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?offset={offset}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            offset = offset
        );

        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::Fetch)?
            .error_for_status()
            .map_err(ApiError::Fetch)?;

        let page = response
            .json::<TracksPage>()
            .await
            .map_err(ApiError::Fetch)?;

        if page.items.is_empty() {
            return Ok(tracks);
        }
        offset += page.items.len() as u64;
        tracks.extend(page.items.into_iter().map(|item| item.track));

        if offset >= page.total {
            return Ok(tracks);
        }
    }

    Err(ApiError::PageLimit(MAX_PAGES))
}

/// Populates a playlist's tracks on first use.
///
/// Tracks are fetched at most once per playlist value; the `expanded` flag is
/// flipped on the first successful gather and never reset.
pub async fn expand_tracks(token: &str, playlist: &mut Playlist) -> Result<(), ApiError> {
    if playlist.expanded {
        return Ok(());
    }

    playlist.tracks = get_tracks(token, &playlist.id).await?;
    playlist.expanded = true;
    Ok(())
}
