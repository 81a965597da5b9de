//! `hostbridge.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hostbridge_targets::{ArchTag, HostTarget, PlatformTag};

/// File name searched for by [`BridgeManifest::find_and_load`].
pub const MANIFEST_NAME: &str = "hostbridge.toml";

/// The top-level manifest of an extension project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Supported build targets.
    #[serde(default)]
    pub targets: TargetsConfig,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Targets section. Empty lists accept any recognized tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetsConfig {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub archs: Vec<String>,
    /// Accept builds whose platform or architecture matched no predicate.
    #[serde(default)]
    pub allow_unrecognized: bool,
}

impl TargetsConfig {
    pub fn allowed_platforms(&self) -> Result<Vec<PlatformTag>> {
        self.platforms
            .iter()
            .map(|name| name.parse::<PlatformTag>().context("in [targets] platforms"))
            .collect()
    }

    pub fn allowed_archs(&self) -> Result<Vec<ArchTag>> {
        self.archs
            .iter()
            .map(|name| name.parse::<ArchTag>().context("in [targets] archs"))
            .collect()
    }
}

impl BridgeManifest {
    /// Search upward from `start_dir` for a `hostbridge.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_NAME);
            if candidate.is_file() {
                let manifest = Self::load(&candidate)?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Read and parse a manifest at an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing hostbridge.toml")
    }

    /// Reasons `target` is not an accepted build target. Empty when it is.
    pub fn violations(&self, target: &HostTarget) -> Result<Vec<String>> {
        let platforms = self.targets.allowed_platforms()?;
        let archs = self.targets.allowed_archs()?;
        let mut out = Vec::new();

        if !target.platform.is_recognized() {
            if !self.targets.allow_unrecognized {
                out.push("platform is unrecognized".to_string());
            }
        } else if !platforms.is_empty() && !platforms.contains(&target.platform) {
            out.push(format!("platform '{}' is not listed", target.platform));
        }

        if !target.arch.is_recognized() {
            if !self.targets.allow_unrecognized {
                out.push("architecture is unrecognized".to_string());
            }
        } else if !archs.is_empty() && !archs.contains(&target.arch) {
            out.push(format!("architecture '{}' is not listed", target.arch));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[project]
name = "fsbinding"
version = "1.2.0"

[targets]
platforms = ["linux", "Darwin", "windows"]
archs = ["x86_64"]
"#;

    #[test]
    fn parse_full_manifest() {
        let m = BridgeManifest::from_str(FULL).unwrap();
        assert_eq!(m.project.name, "fsbinding");
        assert_eq!(m.project.version, "1.2.0");
        assert_eq!(
            m.targets.allowed_platforms().unwrap(),
            vec![PlatformTag::Linux, PlatformTag::MacOS, PlatformTag::Windows]
        );
        assert_eq!(m.targets.allowed_archs().unwrap(), vec![ArchTag::Amd64]);
        assert!(!m.targets.allow_unrecognized);
    }

    #[test]
    fn minimal_manifest_accepts_any_recognized_target() {
        let m = BridgeManifest::from_str("[project]\nname = \"x\"\n").unwrap();
        assert_eq!(m.project.version, "0.1.0");
        let target = HostTarget::new(PlatformTag::FreeBSD, ArchTag::Ia32);
        assert!(m.violations(&target).unwrap().is_empty());
    }

    #[test]
    fn unlisted_platform_is_reported() {
        let m = BridgeManifest::from_str(FULL).unwrap();
        let target = HostTarget::new(PlatformTag::Solaris, ArchTag::Ia32);
        let v = m.violations(&target).unwrap();
        assert_eq!(
            v,
            vec![
                "platform 'solaris' is not listed".to_string(),
                "architecture 'ia32' is not listed".to_string(),
            ]
        );
    }

    #[test]
    fn unrecognized_requires_opt_in() {
        let target = HostTarget::new(PlatformTag::Unrecognized, ArchTag::Amd64);

        let strict = BridgeManifest::from_str(FULL).unwrap();
        assert_eq!(
            strict.violations(&target).unwrap(),
            vec!["platform is unrecognized".to_string()]
        );

        let lenient = BridgeManifest::from_str(
            "[project]\nname = \"x\"\n\n[targets]\nplatforms = [\"linux\"]\nallow-unrecognized = true\n",
        )
        .unwrap();
        assert!(lenient.violations(&target).unwrap().is_empty());
    }

    #[test]
    fn unknown_tag_name_is_an_error() {
        let m = BridgeManifest::from_str(
            "[project]\nname = \"x\"\n\n[targets]\nplatforms = [\"beos\"]\n",
        )
        .unwrap();
        let err = m
            .violations(&HostTarget::new(PlatformTag::Linux, ArchTag::Amd64))
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown platform tag: 'beos'"));
    }

    #[test]
    fn find_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_NAME), FULL).unwrap();
        let nested = dir.path().join("src").join("native");
        std::fs::create_dir_all(&nested).unwrap();

        let (m, found) = BridgeManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(m.project.name, "fsbinding");
        assert_eq!(found, dir.path());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_NAME);
        std::fs::write(&path, "[targets]\nplatforms = [\"linux\"]\n").unwrap();
        let err = BridgeManifest::load(&path).unwrap_err();
        assert!(format!("{err:#}").starts_with("parsing "));
    }
}
