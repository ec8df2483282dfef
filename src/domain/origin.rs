/// Result of feature origin resolution
///
/// Either a `feature/<label>`-tagged commit found among the feature-only
/// commits, or the boundary commit shared with develop when no tag matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureOrigin {
    /// Full hex sha of the origin commit
    pub sha: String,
    /// Label extracted from the matching feature tag, if any
    pub feature_tag: Option<String>,
}

impl FeatureOrigin {
    /// Origin anchored on a tagged feature commit
    pub fn tagged(sha: impl Into<String>, label: impl Into<String>) -> Self {
        FeatureOrigin {
            sha: sha.into(),
            feature_tag: Some(label.into()),
        }
    }

    /// Origin anchored on the joint commit with develop
    pub fn boundary(sha: impl Into<String>) -> Self {
        FeatureOrigin {
            sha: sha.into(),
            feature_tag: None,
        }
    }
}
