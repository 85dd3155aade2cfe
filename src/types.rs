use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// In-process state of one login attempt, shared between the auth flow and
/// the callback handler. Holds exactly one live verifier; a later attempt
/// overwrites it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub id: String,
    pub email: String,
    pub uri: String,
    pub href: String,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

/// A playlist as listed by `/me/playlists`. Tracks are not part of the
/// listing response; they are gathered lazily and `expanded` records that
/// the gather already happened.
#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    pub tracks: Vec<Track>,
    #[serde(skip)]
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub uri: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistsPage {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksPage {
    pub items: Vec<PlaylistTrackItem>,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub uri: String,
}

#[derive(Tabled)]
pub struct SelectionTableRow {
    pub position: usize,
    pub uri: String,
}
