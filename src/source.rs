use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where a share document comes from.
pub trait ShareSource {
    /// Name used in report headers and error messages.
    fn label(&self) -> String;
    /// The full document text.
    fn read(&self) -> Result<String>;
}

/// A share document on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShareSource for FileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| Error::SourceUnavailable {
            label: self.label(),
            source,
        })
    }
}

/// An in-memory share document.
pub struct InlineSource {
    label: String,
    text: String,
}

impl InlineSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl ShareSource for InlineSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
