//! Domain logic - pure business rules independent of git operations

pub mod origin;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use origin::FeatureOrigin;
pub use prerelease::build_prerelease;
pub use tag::parse_feature_tag;
pub use version::Version;
