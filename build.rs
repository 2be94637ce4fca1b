use std::path::Path;
use std::process::Command;

/// Embeds the short commit hash in `SKETCHBOOK_GIT_HASH` for `--version`.
fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SKETCHBOOK_GIT_HASH={hash}");

    let git_dir = git(&["rev-parse", "--git-dir"]);
    if let Some(dir) = git_dir.as_deref().map(Path::new) {
        for tracked in ["HEAD", "refs", "packed-refs"] {
            let path = dir.join(tracked);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
