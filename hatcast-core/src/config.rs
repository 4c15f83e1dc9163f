use std::{fs, path::Path};

use crate::error::Error;

/// Name of the key file expected in the working directory.
pub const KEY_FILE: &str = "key.txt";

/// Location queried when nothing overrides the default.
pub const DEFAULT_STATE: &str = "MN";
pub const DEFAULT_CITY: &str = "Minneapolis";

/// API key for the weather provider.
///
/// Opaque: the first line of the key file, taken verbatim with the line
/// terminator stripped. No format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `path`.
    ///
    /// A file that cannot be read is `KeyFileNotFound`; a file whose first
    /// line is absent or empty is `KeyMissing`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::KeyFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        match contents.lines().next() {
            Some(line) if !line.is_empty() => Ok(Self(line.to_string())),
            _ => Err(Error::KeyMissing { path: path.to_path_buf() }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// State/city pair substituted into the conditions URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub state: String,
    pub city: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            state: DEFAULT_STATE.to_string(),
            city: DEFAULT_CITY.to_string(),
        }
    }
}
