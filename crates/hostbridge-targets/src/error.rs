//! Error types for target tag operations.

/// Errors that can occur while working with target tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    /// A tag name did not match any known platform or architecture.
    #[error("unknown {kind} tag: '{name}'")]
    UnknownTag {
        /// Which tag group was being parsed ("platform" or "architecture").
        kind: &'static str,
        /// The name that failed to parse.
        name: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
