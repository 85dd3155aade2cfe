use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::AuthSession};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthSession>>>) {
    spotify::auth::auth(shared_state).await;
}
