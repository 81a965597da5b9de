//! CPU architecture tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;
use crate::symbols::CfgSymbols;

/// The CPU architecture a build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchTag {
    /// 32-bit x86.
    Ia32,
    /// x86-64.
    Amd64,
    /// No architecture predicate matched.
    Unrecognized,
}

impl ArchTag {
    /// Recognized architectures, in resolution order.
    pub const ALL: [Self; 2] = [Self::Ia32, Self::Amd64];

    /// Resolve the architecture from a symbol set, first match wins.
    pub const fn resolve(symbols: &CfgSymbols) -> Self {
        if symbols.x86 {
            Self::Ia32
        } else if symbols.x86_64 {
            Self::Amd64
        } else {
            Self::Unrecognized
        }
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Pointer width in bits, if known.
    pub const fn pointer_width(self) -> Option<u32> {
        match self {
            Self::Ia32 => Some(32),
            Self::Amd64 => Some(64),
            Self::Unrecognized => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ia32 => "ia32",
            Self::Amd64 => "amd64",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchTag {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ia32" | "x86" | "i386" | "i686" => Ok(Self::Ia32),
            "amd64" | "x86_64" | "x64" => Ok(Self::Amd64),
            "unrecognized" => Ok(Self::Unrecognized),
            _ => Err(TargetError::UnknownTag {
                kind: "architecture",
                name: s.to_string(),
            }),
        }
    }
}

/// Architecture of the current build.
pub const ARCH: ArchTag = ArchTag::resolve(&CfgSymbols::BUILD);

pub const ARCH_IA32: bool = matches!(ARCH, ArchTag::Ia32);
pub const ARCH_AMD64: bool = matches!(ARCH, ArchTag::Amd64);
