//! Host runtime bridge helpers for the hostbridge native extension.
//!
//! Native code called from the host scripting runtime receives values that
//! may be absent or not yet materialized. Where the calling code has already
//! established that a value exists, [`unwrap`] extracts it in one spelling,
//! whatever container shape the host API handed back. Genuinely bad input from
//! the script side is reported with [`raise_bad_argument`] instead.
//!
//! ## Modules
//!
//! - [`fallible`] — `Fallible<T>` sum type and the `unwrap` conversion
//! - [`runtime`] — Host runtime seam and string/error helpers
//! - [`error`] — Recoverable error kinds surfaced to the host

pub mod error;
pub mod fallible;
pub mod runtime;

pub use error::{BridgeError, HostErrorKind};
pub use fallible::{unwrap, Fallible, Required};
pub use runtime::{make_string_value, raise_bad_argument, HostRuntime};
