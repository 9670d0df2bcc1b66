//! JSON file configuration source.

use crate::monitor::domain::ServerRecord;
use crate::monitor::ports::{ConfigSource, ConfigSourceError, ConfigSourceResult};
use async_trait::async_trait;
use cap_std::fs_utf8::Dir;

/// Configuration source reading a JSON array of server records from a file.
///
/// Access goes through a capability-scoped directory handle, so the source
/// can only ever read within the directory it was granted. Config files are
/// small; the read is performed inline.
#[derive(Debug)]
pub struct JsonConfigSource {
    dir: Dir,
    file_name: String,
}

impl JsonConfigSource {
    /// Creates a source reading `file_name` inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<String>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }
}

#[async_trait]
impl ConfigSource for JsonConfigSource {
    async fn enumerate(&self) -> ConfigSourceResult<Vec<ServerRecord>> {
        let contents = self
            .dir
            .read_to_string(self.file_name.as_str())
            .map_err(ConfigSourceError::unreadable)?;
        serde_json::from_str(&contents).map_err(ConfigSourceError::unreadable)
    }
}
