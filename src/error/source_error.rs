#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while loading a script.
pub enum SourceError {
    /// The file could not be opened or read.
    FileNotOpened {
        /// The path that was requested.
        path:   String,
        /// The reason reported by the operating system.
        reason: String,
    },
    /// A line number past the end of the text was requested.
    LineOutOfBounds {
        /// The requested 1-based line.
        line:  usize,
        /// How many lines the text has.
        lines: usize,
    },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotOpened { path, reason } => {
                write!(f, "Failed to open '{path}': {reason}.")
            },
            Self::LineOutOfBounds { line, lines } => {
                write!(f, "Line {line} is out of bounds, the text has {lines} lines.")
            },
        }
    }
}

impl std::error::Error for SourceError {}
