//! Operating-system tag.
//!
//! Resolved once per build from [`CfgSymbols::BUILD`]. The `OS_*` constants
//! are mutually exclusive: at most one of them is `true`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;
use crate::symbols::CfgSymbols;

/// The operating system a build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTag {
    Linux,
    Windows,
    MacOS,
    FreeBSD,
    Solaris,
    /// No platform predicate matched.
    Unrecognized,
}

impl PlatformTag {
    /// Recognized platforms, in resolution order.
    pub const ALL: [Self; 5] = [
        Self::Linux,
        Self::Windows,
        Self::FreeBSD,
        Self::MacOS,
        Self::Solaris,
    ];

    /// Resolve the platform from a symbol set. The first matching predicate
    /// wins, so overlapping symbols still yield a single tag.
    pub const fn resolve(symbols: &CfgSymbols) -> Self {
        if symbols.linux {
            Self::Linux
        } else if symbols.windows {
            Self::Windows
        } else if symbols.freebsd {
            Self::FreeBSD
        } else if symbols.macos {
            Self::MacOS
        } else if symbols.solaris {
            Self::Solaris
        } else {
            Self::Unrecognized
        }
    }

    /// Whether a platform predicate matched.
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::FreeBSD => "freebsd",
            Self::Solaris => "solaris",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformTag {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "windows" | "win32" => Ok(Self::Windows),
            "macos" | "darwin" => Ok(Self::MacOS),
            "freebsd" => Ok(Self::FreeBSD),
            "solaris" | "illumos" | "sunos" => Ok(Self::Solaris),
            "unrecognized" => Ok(Self::Unrecognized),
            _ => Err(TargetError::UnknownTag {
                kind: "platform",
                name: s.to_string(),
            }),
        }
    }
}

/// Platform of the current build.
pub const PLATFORM: PlatformTag = PlatformTag::resolve(&CfgSymbols::BUILD);

pub const OS_LINUX: bool = matches!(PLATFORM, PlatformTag::Linux);
pub const OS_WINDOWS: bool = matches!(PLATFORM, PlatformTag::Windows);
pub const OS_MACOS: bool = matches!(PLATFORM, PlatformTag::MacOS);
pub const OS_FREEBSD: bool = matches!(PLATFORM, PlatformTag::FreeBSD);
pub const OS_SOLARIS: bool = matches!(PLATFORM, PlatformTag::Solaris);

#[cfg(test)]
mod tests {
    use super::*;

    fn flags_for(tag: PlatformTag) -> [bool; 5] {
        PlatformTag::ALL.map(|t| t == tag)
    }

    #[test]
    fn build_constants_are_exclusive() {
        let flags = [OS_LINUX, OS_WINDOWS, OS_FREEBSD, OS_MACOS, OS_SOLARIS];
        let set = flags.iter().filter(|f| **f).count();
        if PLATFORM.is_recognized() {
            assert_eq!(set, 1);
        } else {
            assert_eq!(set, 0);
        }
        assert_eq!(flags, flags_for(PLATFORM));
    }

    #[test]
    fn build_constants_match_cfg() {
        assert_eq!(OS_LINUX, cfg!(target_os = "linux"));
        assert_eq!(OS_WINDOWS, cfg!(target_os = "windows"));
        assert_eq!(OS_MACOS, cfg!(target_os = "macos"));
    }

    #[test]
    fn linux_only() {
        let symbols = CfgSymbols {
            linux: true,
            x86_64: true,
            ..CfgSymbols::NONE
        };
        let tag = PlatformTag::resolve(&symbols);
        assert_eq!(tag, PlatformTag::Linux);
        assert_eq!(flags_for(tag), [true, false, false, false, false]);
    }

    #[test]
    fn nothing_defined_is_unrecognized() {
        let tag = PlatformTag::resolve(&CfgSymbols::NONE);
        assert_eq!(tag, PlatformTag::Unrecognized);
        assert!(!tag.is_recognized());
        assert!(flags_for(tag).iter().all(|f| !f));
    }

    #[test]
    fn first_match_wins() {
        let all = CfgSymbols {
            linux: true,
            windows: true,
            freebsd: true,
            macos: true,
            solaris: true,
            ..CfgSymbols::NONE
        };
        assert_eq!(PlatformTag::resolve(&all), PlatformTag::Linux);

        let bsd_and_mac = CfgSymbols {
            freebsd: true,
            macos: true,
            ..CfgSymbols::NONE
        };
        assert_eq!(PlatformTag::resolve(&bsd_and_mac), PlatformTag::FreeBSD);

        let mac_and_solaris = CfgSymbols {
            macos: true,
            solaris: true,
            ..CfgSymbols::NONE
        };
        assert_eq!(PlatformTag::resolve(&mac_and_solaris), PlatformTag::MacOS);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Linux".parse::<PlatformTag>().unwrap(), PlatformTag::Linux);
        assert_eq!("darwin".parse::<PlatformTag>().unwrap(), PlatformTag::MacOS);
        assert_eq!("illumos".parse::<PlatformTag>().unwrap(), PlatformTag::Solaris);
        let err = "plan9".parse::<PlatformTag>().unwrap_err();
        assert_eq!(err.to_string(), "unknown platform tag: 'plan9'");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tag in PlatformTag::ALL {
            assert_eq!(tag.to_string().parse::<PlatformTag>().unwrap(), tag);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&PlatformTag::FreeBSD).unwrap();
        assert_eq!(json, "\"freebsd\"");
        let tag: PlatformTag = serde_json::from_str("\"macos\"").unwrap();
        assert_eq!(tag, PlatformTag::MacOS);
    }
}
