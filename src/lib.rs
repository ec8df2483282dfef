pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod package;
pub mod template;
pub mod ui;

pub use error::{BranchVersionError, Result};
