//! `hostbridge tags` — list recognized tags in resolution order.

use anyhow::Result;

use hostbridge_targets::{ArchTag, PlatformTag};

pub fn run() -> Result<()> {
    println!("Platforms (first match wins):");
    for (i, tag) in PlatformTag::ALL.iter().enumerate() {
        println!("  {}. {tag}", i + 1);
    }
    println!();
    println!("Architectures (first match wins):");
    for (i, tag) in ArchTag::ALL.iter().enumerate() {
        println!("  {}. {tag}", i + 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn tags_runs() {
        super::run().unwrap();
    }
}
