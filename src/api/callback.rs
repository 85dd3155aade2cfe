use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{
    session::{self, SessionAction},
    spotify::auth::{AuthError, exchange_code_pkce},
    types::AuthSession,
    warning,
};

/// OAuth callback handler.
///
/// Decides via [`session::next_action`] whether the redirect carries an
/// authorization code. Without a code no token-endpoint call is made. With a
/// code, the verifier of the live login attempt is consumed for exactly one
/// exchange and the resulting token is placed back into the shared session
/// for the waiting auth flow.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthSession>>>>,
) -> Html<&'static str> {
    let code = match session::next_action(&params) {
        SessionAction::Exchange(code) => code,
        SessionAction::Authorize => {
            return Html("<h4>Missing authorization code.</h4>");
        }
    };

    let mut state = shared_state.lock().await;
    // Take code verifier from the live login attempt
    let Some(ref mut auth_session) = state.as_mut() else {
        warning!("{}", AuthError::MissingVerifier);
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    let verifier = auth_session.code_verifier.clone();

    match exchange_code_pkce(&code, &verifier).await {
        Ok(token) => {
            auth_session.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>You can close this browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
