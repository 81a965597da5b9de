//! Bridge error types.

/// Message carried by every bad-argument error.
pub const BAD_ARGUMENT: &str = "Bad argument";

/// Class of exception raised in the host context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostErrorKind {
    TypeError,
}

/// Errors native code reports back to the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The script passed an argument the native call cannot accept.
    #[error("{}", BAD_ARGUMENT)]
    InvalidArgument,
}

impl BridgeError {
    /// The exception class the host should see for this error.
    pub fn host_kind(&self) -> HostErrorKind {
        match self {
            Self::InvalidArgument => HostErrorKind::TypeError,
        }
    }
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        assert_eq!(BridgeError::InvalidArgument.to_string(), "Bad argument");
        assert_eq!(
            BridgeError::InvalidArgument.host_kind(),
            HostErrorKind::TypeError
        );
    }
}
