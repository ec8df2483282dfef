//! Concurrent two-branch history walker
//!
//! The feature and develop histories are independent reads, so both walks
//! run on scoped worker threads and join before resolution starts. The
//! first failing walk aborts the operation; the other walk's result is
//! discarded rather than cancelled.

use crate::error::{BranchVersionError, Result};
use crate::git::Repository;
use git2::Oid;
use std::thread;

/// Walk the complete histories of two head commits concurrently.
///
/// Returns the ordered commit lists for `head_a` and `head_b`, or the first
/// walk error. Both walks always run to completion before this returns.
pub fn walk_histories<R: Repository + ?Sized>(
    repo: &R,
    head_a: Oid,
    head_b: Oid,
) -> Result<(Vec<Oid>, Vec<Oid>)> {
    thread::scope(|scope| {
        let walker_a = scope.spawn(move || repo.walk_history(head_a));
        let walker_b = scope.spawn(move || repo.walk_history(head_b));

        let history_a = walker_a
            .join()
            .map_err(|_| BranchVersionError::history("history walker panicked"))?;
        let history_b = walker_b
            .join()
            .map_err(|_| BranchVersionError::history("history walker panicked"))?;

        Ok((history_a?, history_b?))
    })
}
