use std::{fmt, sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error, pkce,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthSession, Token, TokenResponse},
    warning,
};

/// Failure of the token-exchange leg of the PKCE flow.
#[derive(Debug)]
pub enum AuthError {
    /// Token exchange was attempted without a live verifier, i.e. without a
    /// prior authorize leg in this process.
    MissingVerifier,
    /// The token endpoint call failed or its body lacked the expected fields.
    Exchange(reqwest::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingVerifier => {
                write!(f, "no PKCE verifier in session; start a new login")
            }
            AuthError::Exchange(e) => write!(f, "token exchange failed: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

/// Runs the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// The flow:
/// 1. Generates a PKCE code verifier and derives its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Stores the verifier in the shared session (overwriting any prior
///    login attempt's verifier)
/// 4. Opens the authorization URL in the user's browser
/// 5. Waits for the callback handler to complete the token exchange
/// 6. Persists the obtained token for subsequent commands
///
/// PKCE binds the authorization code to the verifier, so no client secret is
/// needed or stored.
///
/// # Arguments
///
/// * `shared_state` - Session state shared with the callback handler; carries
///   the verifier out and the token back
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthSession>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = pkce::generate_code_verifier(pkce::VERIFIER_LENGTH);
    let code_challenge = pkce::generate_code_challenge(&code_verifier);

    // start callback server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthSession {
            code_verifier,
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared session for a completed token exchange with a 60-second
/// timeout, sleeping one second between polls. Runs concurrently with the
/// callback handler that populates the token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthSession>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(auth_session) = lock.as_ref() {
            if let Some(token) = &auth_session.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the flow by posting the code together with the verifier that was
/// generated at the start of it. The verifier proves that the same client
/// that initiated the flow is completing it.
///
/// # Arguments
///
/// * `code` - Authorization code received from the OAuth callback
/// * `verifier` - PKCE code verifier generated at the start of the flow
///
/// # Errors
///
/// Returns [`AuthError::Exchange`] when the HTTP call fails, the token
/// endpoint answers with a non-success status, or the response body lacks an
/// `access_token`. There is no retry and no refresh-token handling; an
/// expired token means a new login.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, AuthError> {
    let client_id = &config::spotify_client_id();
    let redirect_uri = &config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await
        .map_err(AuthError::Exchange)?
        .error_for_status()
        .map_err(AuthError::Exchange)?;

    let body: TokenResponse = res.json().await.map_err(AuthError::Exchange)?;

    Ok(Token {
        access_token: body.access_token,
        scope: body.scope,
        expires_in: body.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
