//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! needed for version calculation, allowing for multiple implementations
//! including real repositories and mock implementations for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations. The concrete implementations are:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// Implementors must be `Send + Sync`: the history walker reads two branch
/// histories from worker threads sharing one repository handle. All access
/// during a calculation is read-only.
pub trait Repository: Send + Sync {
    /// Get the OID of a local branch's HEAD
    fn branch_head_oid(&self, branch_name: &str) -> Result<Oid>;

    /// Name of the branch HEAD currently points at
    fn current_branch(&self) -> Result<String>;

    /// Full ancestor history of a commit, the commit itself first
    ///
    /// Order follows the underlying revwalk (topological/commit-time).
    fn walk_history(&self, head: Oid) -> Result<Vec<Oid>>;

    /// All tag names in the repository, in listing order
    ///
    /// Listing order is meaningful: when several feature tags could anchor
    /// the origin, the first one in this order wins.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Resolve a tag name to the commit it points at
    ///
    /// Annotated tags are peeled to their target commit. Fails if the tag
    /// does not exist.
    fn tag_target_oid(&self, tag_name: &str) -> Result<Oid>;

    /// Count commits reachable from `head` but not from `origin`
    fn count_commits_since(&self, origin: Oid, head: Oid) -> Result<u64>;
}
