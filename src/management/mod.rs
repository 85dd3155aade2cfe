//! Persistence layer for the small amount of state that outlives a single
//! command invocation: the access token obtained by `auth` and the set of
//! track URIs the user has selected for transfer. Both live as JSON files in
//! the platform data directory.

mod selection;
mod token;

pub use selection::SelectionManager;
pub use selection::StoreError;
pub use token::TokenManager;
