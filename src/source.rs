use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::SourceError;

/// A script loaded fully into memory.
///
/// The text is read once on [`SourceFile::open`]; later calls never touch the
/// file system again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    /// Returns `SourceError::FileNotOpened` if the file does not exist or
    /// cannot be read as UTF-8 text.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
                                               SourceError::FileNotOpened { path:   path.display().to_string(),
                                                                            reason: e.to_string(), }
                                           })?;

        Ok(Self { path: path.to_path_buf(),
                  text })
    }

    /// Wraps text that did not come from disk.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self { path: path.into(),
               text: text.into() }
    }

    /// The path the text was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole text.
    #[must_use]
    pub fn read(&self) -> &str {
        &self.text
    }

    /// Number of lines in the text.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Returns line `number`, counting from 1, without its line terminator.
    ///
    /// # Errors
    /// Returns `SourceError::LineOutOfBounds` for line 0 or any line past
    /// the end of the text.
    ///
    /// # Example
    /// ```
    /// use setlang::source::SourceFile;
    ///
    /// let file = SourceFile::from_text("demo.set", "set x = 1\nx + 1\n");
    /// assert_eq!(file.line(2).unwrap(), "x + 1");
    /// assert!(file.line(3).is_err());
    /// assert!(file.line(0).is_err());
    /// ```
    pub fn line(&self, number: usize) -> Result<&str, SourceError> {
        let out_of_bounds = || SourceError::LineOutOfBounds { line:  number,
                                                              lines: self.line_count(), };

        let index = number.checked_sub(1).ok_or_else(out_of_bounds)?;
        self.text.lines().nth(index).ok_or_else(out_of_bounds)
    }
}
