//! # Spotify Integration Module
//!
//! This module is the integration layer between Trackferry and the Spotify
//! Web API. It handles the OAuth 2.0 PKCE authentication flow, profile and
//! playlist retrieval, and playlist modification.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   redirect, local callback handling, and token exchange
//! - [`profile`] - Current-user profile retrieval (`GET /me`)
//! - [`playlists`] - Offset-paginated playlist and track listing
//! - [`transfer`] - Adding selected tracks to a target playlist
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization-code token exchange (PKCE)
//! - `GET /me` - Current user's profile
//! - `GET /me/playlists` - Current user's playlists, paginated by offset
//! - `GET /playlists/{id}/tracks` - Playlist tracks, paginated by offset
//! - `POST /playlists/{id}/tracks` - Add tracks to a playlist
//!
//! ## Error Handling
//!
//! Requests are not retried. Any non-success status or undecodable body
//! surfaces as an [`ApiError`] (or [`auth::AuthError`] in the token flow)
//! and aborts the operation that issued it; aggregations never return
//! partial results.

use std::fmt;

pub mod auth;
pub mod playlists;
pub mod profile;
pub mod transfer;

/// Failure of an authenticated Web API call.
#[derive(Debug)]
pub enum ApiError {
    /// A GET failed: transport error, non-success status, or a body that did
    /// not decode into the expected shape.
    Fetch(reqwest::Error),
    /// A track-add POST failed; remaining transfers are not attempted.
    Transfer(reqwest::Error),
    /// A paginated listing did not terminate within the page cap.
    PageLimit(u32),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch(e) => write!(f, "request failed: {}", e),
            ApiError::Transfer(e) => write!(f, "track add failed: {}", e),
            ApiError::PageLimit(pages) => {
                write!(f, "listing did not terminate within {} pages", pages)
            }
        }
    }
}

impl std::error::Error for ApiError {}
