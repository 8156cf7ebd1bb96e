// Bake `git describe` into the binary for --version

use std::path::Path;
use std::process::Command;

fn main() {
    let describe = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=GIT_DESCRIBE={}", describe);

    // Only watch git files that exist, or cargo reruns this on every build
    println!("cargo:rerun-if-changed=build.rs");
    for tracked in [".git/HEAD", ".git/index"] {
        if Path::new(tracked).exists() {
            println!("cargo:rerun-if-changed={}", tracked);
        }
    }
}
