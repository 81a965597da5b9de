//! Host runtime seam.
//!
//! The embedding API that owns script values lives outside this crate.
//! [`HostRuntime`] is the slice of it the helpers here need: allocating a
//! string handle and throwing an exception into the running script.

use tracing::{debug, trace};

use crate::error::{BridgeError, HostErrorKind, Result};
use crate::fallible::{unwrap, Fallible};

/// The embedding context native code is called with.
pub trait HostRuntime {
    /// Handle to a string value owned by the host.
    type String;

    /// Allocate a host string. The host may decline, in which case the
    /// handle is absent.
    fn new_string(&self, value: &str) -> Fallible<Self::String>;

    /// Schedule an exception of `kind` in the calling script context.
    fn throw(&self, kind: HostErrorKind, message: &str);
}

/// Build a host string from a constant and unwrap the handle.
///
/// Panics if the host fails to allocate the string.
#[track_caller]
pub fn make_string_value<R>(runtime: &R, constant: &str) -> R::String
where
    R: HostRuntime + ?Sized,
{
    trace!(len = constant.len(), "allocating host string");
    unwrap(runtime.new_string(constant))
}

/// Throw a "Bad argument" type error into the host context.
///
/// Always returns `Err(BridgeError::InvalidArgument)` so native entry points
/// can bail out with `?` once the exception is scheduled.
pub fn raise_bad_argument<R, T>(runtime: &R) -> Result<T>
where
    R: HostRuntime + ?Sized,
{
    let err = BridgeError::InvalidArgument;
    debug!(kind = ?err.host_kind(), "raising bad argument in host context");
    runtime.throw(err.host_kind(), &err.to_string());
    Err(err)
}
