//! # API Module
//!
//! HTTP endpoints served by the local callback server during authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server and completes the PKCE token exchange
//! - [`health`] - Health check returning application status and version
//!
//! Both handlers are plain async functions wired into an [Axum](https://docs.rs/axum)
//! router by [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
