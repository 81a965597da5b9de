//! `hostbridge target` — describe the build target.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use hostbridge_targets::{
    HostTarget, SysApi, ARCH_AMD64, ARCH_IA32, OS_FREEBSD, OS_LINUX, OS_MACOS, OS_SOLARIS,
    OS_WINDOWS,
};

/// Everything known about a build target, as printed by `target --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetReport {
    pub name: String,
    #[serde(flatten)]
    pub target: HostTarget,
    pub recognized: bool,
    pub sys_api: SysApi,
    pub pointer_width: Option<u32>,
    pub constants: BTreeMap<&'static str, bool>,
}

impl TargetReport {
    pub fn build() -> Self {
        let target = HostTarget::BUILD;
        let constants = BTreeMap::from([
            ("OS_LINUX", OS_LINUX),
            ("OS_WINDOWS", OS_WINDOWS),
            ("OS_FREEBSD", OS_FREEBSD),
            ("OS_MACOS", OS_MACOS),
            ("OS_SOLARIS", OS_SOLARIS),
            ("ARCH_IA32", ARCH_IA32),
            ("ARCH_AMD64", ARCH_AMD64),
        ]);

        Self {
            name: target.name(),
            target,
            recognized: target.is_recognized(),
            sys_api: target.sys_api(),
            pointer_width: target.arch.pointer_width(),
            constants,
        }
    }
}

/// Print the build target.
pub fn run(json: bool) -> Result<()> {
    let report = TargetReport::build();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Build target: {} ===", report.name);
    println!("  Platform:      {}", report.target.platform);
    println!("  Architecture:  {}", report.target.arch);
    println!("  System API:    {}", report.sys_api);
    match report.pointer_width {
        Some(bits) => println!("  Pointer width: {bits} bits"),
        None => println!("  Pointer width: unknown"),
    }
    if !report.recognized {
        println!();
        println!("  note: target not fully recognized; native code uses the POSIX fallback");
    }
    println!();
    println!("--- Constants ---");
    for (name, value) in &report.constants {
        println!("  {name:<12} {value}");
    }

    Ok(())
}
