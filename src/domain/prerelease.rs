//! Prerelease string construction for feature branches
//!
//! The rendered label is the feature tag when one was resolved, otherwise a
//! short form of the origin commit sha.

use crate::template;

/// Length of the short sha used when no feature tag was found
const SHORT_SHA_LEN: usize = 7;

/// Added to the commit count when the origin is a tagged feature commit.
///
/// Once the lineage is measured from a tag's label rather than the raw
/// boundary commit, the tag's own commit is counted once more. Whether the
/// extra count is a deliberate correction is unclear; kept behind this
/// constant so it can be revisited in one place.
const TAGGED_COUNT_OFFSET: u64 = 1;

/// Build the prerelease string for a feature branch.
///
/// The label is normalized into legal semver prerelease identifiers before
/// rendering: the result is written into `package.json` and must parse back
/// as part of a version on the next run. A feature tag whose label
/// normalizes to nothing is treated as absent.
///
/// # Arguments
/// * `template_str` - Template with `{sha}` and `{count}` placeholders
///   (configuration key `prerelease.feature`)
/// * `origin_sha` - Full hex sha of the resolved origin commit
/// * `commits_since_origin` - Commit count reported by the repository
/// * `feature_tag` - Label of the matching feature tag, if any
pub fn build_prerelease(
    template_str: &str,
    origin_sha: &str,
    commits_since_origin: u64,
    feature_tag: Option<&str>,
) -> String {
    let tag_label = feature_tag
        .map(semver_safe_label)
        .filter(|label| !label.is_empty());

    let label = match &tag_label {
        Some(label) => label.clone(),
        None => {
            let short: String = origin_sha.chars().take(SHORT_SHA_LEN).collect();
            semver_safe_label(&short)
        }
    };

    let count = match tag_label {
        Some(_) => commits_since_origin + TAGGED_COUNT_OFFSET,
        None => commits_since_origin,
    };

    template::render(
        template_str,
        &[("sha", label.as_str()), ("count", &count.to_string())],
    )
}

/// Normalize a label into legal semver prerelease identifiers.
///
/// Characters outside `[0-9A-Za-z-]` become `-` within each dot-separated
/// identifier, empty identifiers are dropped, and an all-digit identifier
/// with a leading zero gets a letter guard: a short sha like `0123456` would
/// otherwise read as an illegal numeric identifier.
fn semver_safe_label(raw: &str) -> String {
    let identifiers: Vec<String> = raw
        .split('.')
        .filter(|identifier| !identifier.is_empty())
        .map(|identifier| {
            let cleaned: String = identifier
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
                .collect();

            let all_digits = cleaned.chars().all(|c| c.is_ascii_digit());
            if all_digits && cleaned.len() > 1 && cleaned.starts_with('0') {
                format!("g{}", cleaned)
            } else {
                cleaned
            }
        })
        .collect();

    identifiers.join(".")
}
