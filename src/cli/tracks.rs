use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{cli, error, info, spotify, types::TrackTableRow};

/// Lists the tracks of one playlist, identified by its ID.
///
/// The playlist is resolved against the user's playlist listing; its tracks
/// are gathered lazily on this first expansion.
pub async fn list_tracks(playlist_id: String) {
    let token = cli::require_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut playlists = match spotify::playlists::get_playlists(&token).await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    let playlist = match playlists.iter_mut().find(|p| p.id == playlist_id) {
        Some(playlist) => playlist,
        None => {
            pb.finish_and_clear();
            error!("No playlist with id {} found.", playlist_id);
        }
    };

    if let Err(e) = spotify::playlists::expand_tracks(&token, playlist).await {
        pb.finish_and_clear();
        error!("Failed to fetch tracks for {}: {}", playlist.name, e);
    }
    pb.finish_and_clear();

    if playlist.tracks.is_empty() {
        info!("Playlist {} has no tracks.", playlist.name);
        return;
    }

    let rows: Vec<TrackTableRow> = playlist
        .tracks
        .iter()
        .map(|track| TrackTableRow {
            name: track.name.clone(),
            uri: track.uri.clone(),
        })
        .collect();

    info!("{} ({} tracks):", playlist.name, rows.len());
    println!("{}", Table::new(rows));
}
