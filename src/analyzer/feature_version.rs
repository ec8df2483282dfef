//! Top-level feature version calculation

use crate::analyzer::origin_resolver::resolve_origin;
use crate::config::Config;
use crate::domain::{build_prerelease, Version};
use crate::error::Result;
use crate::git::Repository;
use crate::history::walk_histories;
use git2::Oid;

/// Computes the next version for a feature branch.
///
/// Ties together the history walker, origin resolver and prerelease builder:
/// the result is the current version with its minor component bumped, patch
/// reset and the feature prerelease attached. Any failing step aborts the
/// whole calculation.
pub struct FeatureVersionCalculator {
    feature_branch: String,
    develop_branch: String,
    prerelease_template: String,
}

impl FeatureVersionCalculator {
    /// Create a calculator with explicit branch names and template
    pub fn new(
        feature_branch: impl Into<String>,
        develop_branch: impl Into<String>,
        prerelease_template: impl Into<String>,
    ) -> Self {
        FeatureVersionCalculator {
            feature_branch: feature_branch.into(),
            develop_branch: develop_branch.into(),
            prerelease_template: prerelease_template.into(),
        }
    }

    /// Create a calculator for a feature branch using configured defaults
    pub fn from_config(feature_branch: impl Into<String>, config: &Config) -> Self {
        FeatureVersionCalculator::new(
            feature_branch,
            config.branches.develop.clone(),
            config.prerelease.feature.clone(),
        )
    }

    /// Calculate the feature branch version from the current package version
    pub fn calculate<R: Repository + ?Sized>(
        &self,
        repo: &R,
        current_version: &Version,
    ) -> Result<Version> {
        let feature_head = repo.branch_head_oid(&self.feature_branch)?;
        let develop_head = repo.branch_head_oid(&self.develop_branch)?;

        let (feature_history, develop_history) =
            walk_histories(repo, feature_head, develop_head)?;

        let origin = resolve_origin(repo, &feature_history, &develop_history)?;

        let origin_oid = Oid::from_str(&origin.sha)?;
        let commits_since_origin = repo.count_commits_since(origin_oid, feature_head)?;

        let prerelease = build_prerelease(
            &self.prerelease_template,
            &origin.sha,
            commits_since_origin,
            origin.feature_tag.as_deref(),
        );

        Ok(current_version.bump_minor_with_prerelease(prerelease))
    }
}
