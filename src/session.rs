use std::collections::HashMap;

/// What the client should do next, decided from the query parameters of the
/// current callback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// No authorization code is present: run the authorize leg. No token
    /// exchange may happen in this state.
    Authorize,
    /// The authorization server returned a code: exchange it, exactly once,
    /// before any API call.
    Exchange(String),
}

/// Inspects callback query parameters and decides between the authorize and
/// exchange legs of the flow. An empty `code` value counts as absent.
pub fn next_action(params: &HashMap<String, String>) -> SessionAction {
    match params.get("code") {
        Some(code) if !code.is_empty() => SessionAction::Exchange(code.clone()),
        _ => SessionAction::Authorize,
    }
}
