use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{cli, error, info, spotify, types::PlaylistTableRow};

/// Lists all playlists of the authenticated user as a table.
pub async fn list_playlists() {
    let token = cli::require_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match spotify::playlists::get_playlists(&token).await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    if playlists.is_empty() {
        info!("No playlists found.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .map(|playlist| PlaylistTableRow {
            id: playlist.id.clone(),
            name: playlist.name.clone(),
        })
        .collect();

    info!("Found {} playlists:", rows.len());
    println!("{}", Table::new(rows));
}
