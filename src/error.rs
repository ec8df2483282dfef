use thiserror::Error;

/// Unified error type for branch-version operations
#[derive(Error, Debug)]
pub enum BranchVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("History read failed: {0}")]
    History(String),

    #[error("Not found joint commit")]
    NoJointCommit,

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Package metadata error: {0}")]
    Package(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in branch-version
pub type Result<T> = std::result::Result<T, BranchVersionError>;

impl BranchVersionError {
    /// Create a history error with context
    pub fn history(msg: impl Into<String>) -> Self {
        BranchVersionError::History(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BranchVersionError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BranchVersionError::Tag(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        BranchVersionError::Branch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BranchVersionError::Config(msg.into())
    }

    /// Create a package metadata error with context
    pub fn package(msg: impl Into<String>) -> Self {
        BranchVersionError::Package(msg.into())
    }
}
