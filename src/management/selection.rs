use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "io error: {}", e),
            StoreError::Serde(e) => write!(f, "serde error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Explicit, ordered selection of track URIs awaiting transfer.
///
/// Selection is owned state, not something re-derived from rendered output;
/// it persists between command invocations so `select` and `transfer` can be
/// separate commands.
pub struct SelectionManager {
    uris: Vec<String>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { uris: Vec::new() }
    }

    /// Loads the persisted selection; a missing file is an empty selection.
    pub async fn load() -> Result<Self, StoreError> {
        let path = Self::selection_path();
        if !path.is_file() {
            return Ok(Self::new());
        }

        let json = async_fs::read_to_string(path)
            .await
            .map_err(StoreError::Io)?;
        let uris: Vec<String> = serde_json::from_str(&json).map_err(StoreError::Serde)?;
        Ok(Self { uris })
    }

    /// Adds a URI, keeping selection order. Returns false for duplicates.
    pub fn add(&mut self, uri: String) -> bool {
        if self.uris.contains(&uri) {
            return false;
        }
        self.uris.push(uri);
        true
    }

    /// Removes a URI. Returns false when it was not selected.
    pub fn remove(&mut self, uri: &str) -> bool {
        let before = self.uris.len();
        self.uris.retain(|u| u != uri);
        self.uris.len() != before
    }

    pub fn has(&self, uri: &str) -> bool {
        self.uris.iter().any(|u| u == uri)
    }

    pub fn uris(&self) -> &Vec<String> {
        &self.uris
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        let path = Self::selection_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::Io)?;
        }

        let json = serde_json::to_string_pretty(&self.uris).map_err(StoreError::Serde)?;
        async_fs::write(path, json).await.map_err(StoreError::Io)
    }

    /// Empties the selection and deletes the persisted file.
    pub async fn clear(&mut self) -> Result<(), StoreError> {
        let path = Self::selection_path();
        self.uris.clear();
        if path.is_file() {
            async_fs::remove_file(path).await.map_err(StoreError::Io)?;
        }
        Ok(())
    }

    fn selection_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("trackferry/state/selection.json");
        path
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}
