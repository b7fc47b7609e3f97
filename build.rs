use std::env;
use std::process::Command;

// Exposes CONFGEN_VERSION_LABEL: "v<version>" for tagged release builds,
// "v<version> (<commit>)" otherwise.
fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".to_string());
    let tag = format!("v{version}");

    let label = match git(&["describe", "--tags", "--exact-match", "HEAD"]) {
        Some(exact) if exact == tag => tag,
        _ => match git(&["rev-parse", "--short=7", "HEAD"]) {
            Some(commit) => format!("{tag} ({commit})"),
            None => tag,
        },
    };

    println!("cargo:rustc-env=CONFGEN_VERSION_LABEL={label}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
