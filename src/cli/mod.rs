//! # CLI Module
//!
//! User-facing command implementations. Each command is a thin async
//! function over the `spotify` and `management` layers that handles user
//! feedback and error presentation.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE login flow
//! - [`profile`] - Show the authenticated user's profile
//! - [`list_playlists`] - List all playlists of the user
//! - [`list_tracks`] - List the tracks of one playlist
//! - [`select`] / [`unselect`] - Manage the transfer selection
//! - [`show_selection`] / [`clear_selection`] - Inspect or reset it
//! - [`transfer`] - Copy the selection into a target playlist
//!
//! Every data command requires a previously stored token; commands fail with
//! a pointer to `trackferry auth` when none is usable. Failures in the
//! underlying API calls are reported and terminate the command without
//! retries.

mod auth;
mod playlists;
mod profile;
mod select;
mod tracks;
mod transfer;

pub use auth::auth;
pub use playlists::list_playlists;
pub use profile::profile;
pub use select::clear_selection;
pub use select::select;
pub use select::show_selection;
pub use select::unselect;
pub use tracks::list_tracks;
pub use transfer::transfer;

use crate::{error, management::TokenManager};

/// Loads the stored access token, terminating with guidance when no usable
/// token exists. Data commands must not issue any API call without one.
pub(crate) async fn require_token() -> String {
    let token_manager = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "No stored token. Please run trackferry auth\n Error: {}",
                e
            );
        }
    };

    if token_manager.is_expired() {
        error!("Stored token has expired. Please run trackferry auth again.");
    }

    token_manager.access_token().to_string()
}
