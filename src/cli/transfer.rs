use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{cli, error, info, management::SelectionManager, spotify, success, warning};

/// Copies the selected tracks into the target playlist.
///
/// The target is an explicit argument; there is no implicit default. After a
/// fully successful transfer the selection is cleared unless `keep_selection`
/// is set.
pub async fn transfer(target_playlist_id: String, keep_selection: bool) {
    let token = cli::require_token().await;

    let mut selection = match SelectionManager::load().await {
        Ok(selection) => selection,
        Err(e) => {
            error!("Failed to load selection: {}", e);
        }
    };

    if selection.is_empty() {
        warning!("Selection is empty, nothing to transfer.");
        return;
    }

    info!(
        "Transferring {} tracks to playlist {}...",
        selection.len(),
        target_playlist_id
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Adding tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match spotify::transfer::transfer_tracks(&token, selection.uris(), &target_playlist_id).await
    {
        Ok(count) => {
            pb.finish_and_clear();
            success!("Added {} tracks to playlist {}.", count, target_playlist_id);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Transfer aborted: {}", e);
        }
    }

    if !keep_selection {
        if let Err(e) = selection.clear().await {
            warning!("Failed to clear selection after transfer: {}", e);
        }
    }
}
