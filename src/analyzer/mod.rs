//! Version analysis built on top of the git abstraction

pub mod feature_version;
pub mod origin_resolver;

pub use feature_version::FeatureVersionCalculator;
pub use origin_resolver::resolve_origin;
