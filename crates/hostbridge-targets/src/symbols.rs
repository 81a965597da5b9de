//! Predefined target symbols.
//!
//! The identifier never reads `cfg` directly. It resolves tags from a
//! [`CfgSymbols`] value, so the precedence rules can be exercised against
//! symbol sets other than the one the crate was compiled with.

/// The compiler-defined symbols the identifier inspects.
///
/// Each field is `true` when the corresponding symbol is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CfgSymbols {
    /// `target_os = "linux"`
    pub linux: bool,
    /// `target_os = "windows"`
    pub windows: bool,
    /// `target_os = "freebsd"`
    pub freebsd: bool,
    /// `target_os = "macos"`
    pub macos: bool,
    /// `target_os = "solaris"` or `target_os = "illumos"`
    pub solaris: bool,
    /// `target_arch = "x86"`
    pub x86: bool,
    /// `target_arch = "x86_64"`
    pub x86_64: bool,
}

impl CfgSymbols {
    /// The symbols defined for the target this crate is being compiled for.
    pub const BUILD: Self = Self {
        linux: cfg!(target_os = "linux"),
        windows: cfg!(target_os = "windows"),
        freebsd: cfg!(target_os = "freebsd"),
        macos: cfg!(target_os = "macos"),
        solaris: cfg!(any(target_os = "solaris", target_os = "illumos")),
        x86: cfg!(target_arch = "x86"),
        x86_64: cfg!(target_arch = "x86_64"),
    };

    /// A symbol set with nothing defined.
    pub const NONE: Self = Self {
        linux: false,
        windows: false,
        freebsd: false,
        macos: false,
        solaris: false,
        x86: false,
        x86_64: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_matches_default() {
        assert_eq!(CfgSymbols::NONE, CfgSymbols::default());
    }

    #[test]
    fn build_symbols_track_cfg() {
        assert_eq!(CfgSymbols::BUILD.linux, cfg!(target_os = "linux"));
        assert_eq!(CfgSymbols::BUILD.x86_64, cfg!(target_arch = "x86_64"));
    }
}
