/// Prefix marking a tag as a feature marker
pub const FEATURE_TAG_PREFIX: &str = "feature/";

/// Extract the label from a `feature/<label>` tag name
///
/// Returns `None` for tag names outside the convention. The label is taken
/// verbatim, so `feature/login-flow` yields `login-flow` and nested names
/// like `feature/auth/oauth` yield `auth/oauth`. A bare `feature/` carries
/// no usable label and is not a marker.
pub fn parse_feature_tag(tag_name: &str) -> Option<&str> {
    tag_name
        .strip_prefix(FEATURE_TAG_PREFIX)
        .filter(|label| !label.is_empty())
}
