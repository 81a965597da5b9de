//! Combined build target.
//!
//! Pairs the platform and architecture tags and selects the system interface
//! family native code should compile against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arch::{ArchTag, ARCH};
use crate::platform::{PlatformTag, PLATFORM};

/// Family of system-call interfaces a platform exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SysApi {
    /// POSIX-style interface (`unistd`, file descriptors, errno).
    Posix,
    /// Win32 interface (handles, `GetLastError`).
    Win32,
}

impl SysApi {
    /// Select the interface family for a platform. Anything that is not
    /// Windows, including an unrecognized platform, uses POSIX.
    pub const fn for_platform(platform: PlatformTag) -> Self {
        match platform {
            PlatformTag::Windows => Self::Win32,
            _ => Self::Posix,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Win32 => "win32",
        }
    }
}

impl fmt::Display for SysApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System interface family of the current build.
pub const SYS_API: SysApi = SysApi::for_platform(PLATFORM);

/// A platform/architecture pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostTarget {
    pub platform: PlatformTag,
    pub arch: ArchTag,
}

impl HostTarget {
    /// The target of the current build.
    pub const BUILD: Self = Self {
        platform: PLATFORM,
        arch: ARCH,
    };

    pub const fn new(platform: PlatformTag, arch: ArchTag) -> Self {
        Self { platform, arch }
    }

    /// Both tags were matched by a predicate.
    pub const fn is_recognized(&self) -> bool {
        self.platform.is_recognized() && self.arch.is_recognized()
    }

    pub const fn sys_api(&self) -> SysApi {
        SysApi::for_platform(self.platform)
    }

    /// Short `platform-arch` name, e.g. `linux-amd64`.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}
