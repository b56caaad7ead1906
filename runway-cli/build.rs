use std::path::Path;
use std::process::Command;

/// Embeds `git describe` output as RUNWAY_BUILD_SHA for `runway --version`.
fn main() {
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());

    let describe = git_describe(&workspace).unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=RUNWAY_BUILD_SHA={describe}");
}

fn git_describe(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
