use std::fmt;
use std::path::PathBuf;

/// Extension every swept document carries.
pub const DOC_EXTENSION: &str = ".mdx";

/// Filename fragment that marks the localized master copy.
pub const LOCALIZED_MARKER: &str = "-zh.mdx";

/// `.mdx` files from one enumeration, split by the localized marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub localized: Vec<PathBuf>,
    pub canonical: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Delete,
    Rename,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Delete => write!(f, "delete"),
            FileOp::Rename => write!(f, "rename"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub op: FileOp,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Regular files seen during enumeration, of any extension.
    pub found: usize,
    pub deleted: Vec<PathBuf>,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<FileFailure>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
