// Public modules
pub mod changelog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod mutator;
pub mod rebrand;
pub mod replacements;
pub mod scaffold;
pub mod walker;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use rebrand::{RebrandOptions, RebrandReport, RebrandStatus};
