//! Property-style tests for origin resolution and the history walker,
//! driven through the public API with the mock repository.

use branch_version::analyzer::resolve_origin;
use branch_version::domain::FeatureOrigin;
use branch_version::error::BranchVersionError;
use branch_version::git::mock::{test_oid, MockRepository};
use branch_version::history::walk_histories;

// feature: 7 -> 6 -> 5 -> 2 -> 1, develop: 4 -> 3 -> 2 -> 1
fn histories() -> (Vec<git2::Oid>, Vec<git2::Oid>) {
    (
        vec![test_oid(7), test_oid(6), test_oid(5), test_oid(2), test_oid(1)],
        vec![test_oid(4), test_oid(3), test_oid(2), test_oid(1)],
    )
}

#[test]
fn tagged_commit_wins_regardless_of_other_tag_insertion_order() {
    let (feature, develop) = histories();

    // Non-matching tags before and after the matching one
    let orderings: Vec<Vec<(&str, u8)>> = vec![
        vec![("feature/match", 6), ("feature/outside", 3), ("v1.0.0", 5)],
        vec![("v1.0.0", 5), ("feature/outside", 3), ("feature/match", 6)],
        vec![("feature/outside", 3), ("feature/match", 6)],
    ];

    for tags in orderings {
        let mut repo = MockRepository::new();
        for (name, n) in tags {
            repo.add_tag(name, test_oid(n));
        }

        let origin = resolve_origin(&repo, &feature, &develop).unwrap();
        assert_eq!(origin, FeatureOrigin::tagged(test_oid(6).to_string(), "match"));
    }
}

#[test]
fn fallback_returns_constructed_common_ancestor() {
    let (feature, develop) = histories();
    let repo = MockRepository::new();

    let origin = resolve_origin(&repo, &feature, &develop).unwrap();

    // Commit 2 is the newest commit present in both histories by construction
    assert_eq!(origin, FeatureOrigin::boundary(test_oid(2).to_string()));
}

#[test]
fn empty_feature_only_set_fails_fast() {
    let repo = MockRepository::new();
    let shared = vec![test_oid(2), test_oid(1)];
    let ahead = vec![test_oid(3), test_oid(2), test_oid(1)];

    let err = resolve_origin(&repo, &shared, &ahead).unwrap_err();
    assert!(matches!(err, BranchVersionError::NoJointCommit));
}

#[test]
fn resolution_is_idempotent_without_repo_mutation() {
    let (feature, develop) = histories();
    let mut repo = MockRepository::new();
    repo.add_tag("feature/match", test_oid(6));

    let runs: Vec<_> = (0..3)
        .map(|_| resolve_origin(&repo, &feature, &develop).unwrap())
        .collect();

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn history_failure_surfaces_whichever_side_fails() {
    for failing in [test_oid(7), test_oid(4)] {
        let mut repo = MockRepository::new();
        let (feature, develop) = histories();
        repo.set_history(test_oid(7), feature);
        repo.set_history(test_oid(4), develop);
        repo.fail_history_for(failing);

        let err = walk_histories(&repo, test_oid(7), test_oid(4)).unwrap_err();
        assert!(matches!(err, BranchVersionError::History(_)));
    }
}

#[test]
fn walker_returns_histories_in_registered_order() {
    let mut repo = MockRepository::new();
    let (feature, develop) = histories();
    repo.set_history(test_oid(7), feature.clone());
    repo.set_history(test_oid(4), develop.clone());

    let (walked_feature, walked_develop) =
        walk_histories(&repo, test_oid(7), test_oid(4)).unwrap();
    assert_eq!(walked_feature, feature);
    assert_eq!(walked_develop, develop);
}
