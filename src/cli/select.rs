use tabled::Table;

use crate::{
    error, info, management::SelectionManager, success, types::SelectionTableRow, warning,
};

/// Adds track URIs to the persisted transfer selection.
pub async fn select(uris: Vec<String>) {
    let mut selection = match SelectionManager::load().await {
        Ok(selection) => selection,
        Err(e) => {
            error!("Failed to load selection: {}", e);
        }
    };

    let mut added = 0;
    for uri in uris {
        if selection.add(uri.clone()) {
            added += 1;
        } else {
            warning!("{} is already selected", uri);
        }
    }

    if let Err(e) = selection.persist().await {
        error!("Failed to save selection: {}", e);
    }
    success!("Selected {} tracks ({} total).", added, selection.len());
}

/// Removes track URIs from the persisted transfer selection.
pub async fn unselect(uris: Vec<String>) {
    let mut selection = match SelectionManager::load().await {
        Ok(selection) => selection,
        Err(e) => {
            error!("Failed to load selection: {}", e);
        }
    };

    for uri in uris {
        if !selection.remove(&uri) {
            warning!("{} was not selected", uri);
        }
    }

    if let Err(e) = selection.persist().await {
        error!("Failed to save selection: {}", e);
    }
    success!("{} tracks remain selected.", selection.len());
}

/// Prints the current transfer selection.
pub async fn show_selection() {
    let selection = match SelectionManager::load().await {
        Ok(selection) => selection,
        Err(e) => {
            error!("Failed to load selection: {}", e);
        }
    };

    if selection.is_empty() {
        info!("Selection is empty.");
        return;
    }

    let rows: Vec<SelectionTableRow> = selection
        .uris()
        .iter()
        .enumerate()
        .map(|(position, uri)| SelectionTableRow {
            position: position + 1,
            uri: uri.clone(),
        })
        .collect();

    info!("{} tracks selected:", rows.len());
    println!("{}", Table::new(rows));
}

/// Empties the transfer selection.
pub async fn clear_selection() {
    let mut selection = match SelectionManager::load().await {
        Ok(selection) => selection,
        Err(e) => {
            error!("Failed to load selection: {}", e);
        }
    };

    if let Err(e) = selection.clear().await {
        error!("Failed to clear selection: {}", e);
    }
    success!("Selection cleared.");
}
