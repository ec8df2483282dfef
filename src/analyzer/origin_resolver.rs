//! Feature origin resolution
//!
//! The heart of the feature version calculation: isolate the commits only
//! the feature branch has, then anchor the version either on a
//! `feature/<label>` tag pointing into that set or on the most recent
//! commit shared with develop.

use crate::domain::{parse_feature_tag, FeatureOrigin};
use crate::error::{BranchVersionError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashSet;

/// Resolve the feature origin from two complete branch histories.
///
/// `target_history` is the feature branch's history, `other_history` the
/// develop branch's, both ordered newest first.
///
/// Fails with [BranchVersionError::NoJointCommit] when the feature branch
/// carries no commit develop lacks. A boundary search could still succeed in
/// that case (develop may simply contain the fully merged feature), but the
/// fail-fast is deliberate: without feature-only commits there is nothing to
/// version.
pub fn resolve_origin<R: Repository + ?Sized>(
    repo: &R,
    target_history: &[Oid],
    other_history: &[Oid],
) -> Result<FeatureOrigin> {
    let other_ids: HashSet<Oid> = other_history.iter().copied().collect();

    // Commits reachable only from the feature head, in history order
    let feature_only: Vec<Oid> = target_history
        .iter()
        .copied()
        .filter(|oid| !other_ids.contains(oid))
        .collect();

    if feature_only.is_empty() {
        return Err(BranchVersionError::NoJointCommit);
    }

    let feature_only_set: HashSet<Oid> = feature_only.iter().copied().collect();

    if let Some((oid, label)) = lookup_feature_tag(repo, &feature_only_set)? {
        return Ok(FeatureOrigin::tagged(oid.to_string(), label));
    }

    // No tag matched: fall back to the joint commit, the most recent commit
    // of the feature history that develop also has
    let joint = target_history
        .iter()
        .copied()
        .find(|oid| other_ids.contains(oid))
        .ok_or(BranchVersionError::NoJointCommit)?;

    Ok(FeatureOrigin::boundary(joint.to_string()))
}

/// Find the first `feature/<label>` tag, in listing order, whose target is a
/// feature-only commit.
fn lookup_feature_tag<R: Repository + ?Sized>(
    repo: &R,
    feature_only: &HashSet<Oid>,
) -> Result<Option<(Oid, String)>> {
    let mut seen = HashSet::new();

    for tag_name in repo.list_tags()? {
        let label = match parse_feature_tag(&tag_name) {
            Some(label) => label.to_string(),
            None => continue,
        };

        // Duplicate names matching the pattern must not trigger a second lookup
        if !seen.insert(tag_name.clone()) {
            continue;
        }

        let target = repo.tag_target_oid(&tag_name)?;
        if feature_only.contains(&target) {
            return Ok(Some((target, label)));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::{test_oid, MockRepository};

    // feature: 5 -> 4 -> 2 -> 1, develop: 3 -> 2 -> 1
    fn diverged_repo() -> (MockRepository, Vec<Oid>, Vec<Oid>) {
        let repo = MockRepository::new();
        let feature = vec![test_oid(5), test_oid(4), test_oid(2), test_oid(1)];
        let develop = vec![test_oid(3), test_oid(2), test_oid(1)];
        (repo, feature, develop)
    }

    #[test]
    fn test_resolves_tagged_feature_commit() {
        let (mut repo, feature, develop) = diverged_repo();
        repo.add_tag("feature/login-flow", test_oid(4));

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.sha, test_oid(4).to_string());
        assert_eq!(origin.feature_tag, Some("login-flow".to_string()));
    }

    #[test]
    fn test_ignores_tags_outside_feature_only_set() {
        let (mut repo, feature, develop) = diverged_repo();
        // Points at a shared commit, so it cannot anchor the feature
        repo.add_tag("feature/shared", test_oid(2));
        repo.add_tag("feature/login-flow", test_oid(5));

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.feature_tag, Some("login-flow".to_string()));
        assert_eq!(origin.sha, test_oid(5).to_string());
    }

    #[test]
    fn test_ignores_non_feature_tags() {
        let (mut repo, feature, develop) = diverged_repo();
        repo.add_tag("v1.2.3", test_oid(4));
        repo.add_tag("release/1.3", test_oid(5));

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.feature_tag, None);
        assert_eq!(origin.sha, test_oid(2).to_string());
    }

    #[test]
    fn test_bare_feature_prefix_tag_is_ignored() {
        let (mut repo, feature, develop) = diverged_repo();
        repo.add_tag("feature/", test_oid(4));

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.feature_tag, None);
        assert_eq!(origin.sha, test_oid(2).to_string());
    }

    #[test]
    fn test_tag_tie_break_is_listing_order() {
        let (mut repo, feature, develop) = diverged_repo();
        repo.add_tag("feature/first", test_oid(4));
        repo.add_tag("feature/second", test_oid(5));

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.feature_tag, Some("first".to_string()));
    }

    #[test]
    fn test_duplicate_tag_names_resolved_once() {
        let (mut repo, feature, develop) = diverged_repo();
        repo.add_tag("feature/dup", test_oid(4));
        repo.add_tag("feature/dup", test_oid(5));

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.feature_tag, Some("dup".to_string()));
        assert_eq!(origin.sha, test_oid(4).to_string());
    }

    #[test]
    fn test_fallback_to_joint_commit() {
        let (repo, feature, develop) = diverged_repo();

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin.sha, test_oid(2).to_string());
        assert_eq!(origin.feature_tag, None);
    }

    #[test]
    fn test_identical_histories_fail_fast() {
        let repo = MockRepository::new();
        let history = vec![test_oid(2), test_oid(1)];

        let err = resolve_origin(&repo, &history, &history).unwrap_err();
        assert!(matches!(err, BranchVersionError::NoJointCommit));
    }

    #[test]
    fn test_feature_behind_develop_fails_fast() {
        // Feature fully merged: develop strictly ahead
        let repo = MockRepository::new();
        let feature = vec![test_oid(2), test_oid(1)];
        let develop = vec![test_oid(3), test_oid(2), test_oid(1)];

        let err = resolve_origin(&repo, &feature, &develop).unwrap_err();
        assert!(matches!(err, BranchVersionError::NoJointCommit));
    }

    #[test]
    fn test_disjoint_histories_fail() {
        let repo = MockRepository::new();
        let feature = vec![test_oid(2), test_oid(1)];
        let develop = vec![test_oid(4), test_oid(3)];

        let err = resolve_origin(&repo, &feature, &develop).unwrap_err();
        assert!(matches!(err, BranchVersionError::NoJointCommit));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let (mut repo, feature, develop) = diverged_repo();
        repo.add_tag("feature/login-flow", test_oid(4));

        let first = resolve_origin(&repo, &feature, &develop).unwrap();
        let second = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(first, second);
    }
}
