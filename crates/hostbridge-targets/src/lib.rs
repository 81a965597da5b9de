//! Build-time platform and architecture identification for the hostbridge
//! native extension.
//!
//! Every tag in this crate is a `const`, resolved from the compiler's target
//! configuration. Nothing is detected at runtime.
//!
//! Resolution is first-match-wins over a fixed precedence order:
//! - **Platform:** Linux → Windows → FreeBSD → macOS → Solaris
//! - **Architecture:** IA32 → AMD64
//!
//! A build matching none of the predicates gets the `Unrecognized` tag, which
//! is a legal outcome: code keyed on [`SYS_API`] falls back to the POSIX
//! interface.
//!
//! ## Modules
//!
//! - [`symbols`] — Snapshot of the predefined target symbols
//! - [`platform`] — Operating-system tag and `OS_*` constants
//! - [`arch`] — CPU architecture tag and `ARCH_*` constants
//! - [`host`] — Combined build target and system interface family

pub mod arch;
pub mod error;
pub mod host;
pub mod platform;
pub mod symbols;

pub use arch::{ArchTag, ARCH, ARCH_AMD64, ARCH_IA32};
pub use error::TargetError;
pub use host::{HostTarget, SysApi, SYS_API};
pub use platform::{
    PlatformTag, OS_FREEBSD, OS_LINUX, OS_MACOS, OS_SOLARIS, OS_WINDOWS, PLATFORM,
};
pub use symbols::CfgSymbols;
