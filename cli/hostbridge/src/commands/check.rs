//! `hostbridge check` — verify the build target is one the project supports.

use std::path::Path;

use anyhow::{bail, Result};
use tracing::{debug, warn};

use hostbridge_targets::HostTarget;

use crate::manifest::BridgeManifest;

/// Load the manifest (explicit path, or searched upward from `project_dir`)
/// and check the build target against it.
pub fn run(project_dir: &Path, manifest_path: Option<&Path>) -> Result<()> {
    let manifest = match manifest_path {
        Some(path) => BridgeManifest::load(path)?,
        None => match BridgeManifest::find_and_load(project_dir)? {
            Some((manifest, dir)) => {
                debug!(dir = %dir.display(), "found manifest");
                manifest
            }
            None => bail!(
                "no hostbridge.toml found in {} or any parent directory",
                project_dir.display()
            ),
        },
    };

    check_target(&manifest, &HostTarget::BUILD)
}

fn check_target(manifest: &BridgeManifest, target: &HostTarget) -> Result<()> {
    let violations = manifest.violations(target)?;
    if violations.is_empty() {
        println!(
            "{} {}: build target {target} is supported",
            manifest.project.name, manifest.project.version
        );
        return Ok(());
    }

    for v in &violations {
        warn!(build = %target, "{v}");
    }
    bail!(
        "build target {target} is not supported by {}: {}",
        manifest.project.name,
        violations.join("; ")
    )
}
