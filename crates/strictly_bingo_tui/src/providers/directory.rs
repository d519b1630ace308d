//! Shows stored as files in a directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use strictly_bingo::{CardError, ShowId, ShowProvider, ShowRecord};
use tracing::{debug, instrument};

/// Reads `<dir>/<id>.toml` or `<dir>/<id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryShowProvider {
    dir: PathBuf,
}

impl DirectoryShowProvider {
    /// Creates a provider rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory shows are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ids name a file directly inside the directory, nothing else.
    fn is_plain_id(id: &ShowId) -> bool {
        let id = id.as_str();
        !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\'])
    }
}

#[async_trait]
impl ShowProvider for DirectoryShowProvider {
    #[instrument(skip(self), fields(dir = %self.dir.display(), show_id = %id))]
    async fn get_show(&self, id: &ShowId) -> Result<ShowRecord, CardError> {
        if !Self::is_plain_id(id) {
            return Err(CardError::NotFound(id.clone()));
        }

        let toml_path = self.dir.join(format!("{}.toml", id));
        match tokio::fs::read_to_string(&toml_path).await {
            Ok(content) => {
                debug!(path = %toml_path.display(), "Parsing TOML show");
                return toml::from_str(&content).map_err(|e| {
                    CardError::Fetch(format!("{}: {}", toml_path.display(), e))
                });
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(CardError::Fetch(format!("{}: {}", toml_path.display(), e))),
        }

        let json_path = self.dir.join(format!("{}.json", id));
        match tokio::fs::read_to_string(&json_path).await {
            Ok(content) => {
                debug!(path = %json_path.display(), "Parsing JSON show");
                serde_json::from_str(&content)
                    .map_err(|e| CardError::Fetch(format!("{}: {}", json_path.display(), e)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CardError::NotFound(id.clone()))
            }
            Err(e) => Err(CardError::Fetch(format!("{}: {}", json_path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids() {
        assert!(DirectoryShowProvider::is_plain_id(&ShowId::new("pilot")));
        assert!(DirectoryShowProvider::is_plain_id(&ShowId::new("season-2")));
        assert!(!DirectoryShowProvider::is_plain_id(&ShowId::new("")));
        assert!(!DirectoryShowProvider::is_plain_id(&ShowId::new("..")));
        assert!(!DirectoryShowProvider::is_plain_id(&ShowId::new("../etc/passwd")));
        assert!(!DirectoryShowProvider::is_plain_id(&ShowId::new("a\\b")));
    }
}
