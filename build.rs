use std::env;
use std::process::Command;

fn git(arguments: &[&str]) -> Option<Vec<u8>> {
    Command::new("git")
        .args(arguments)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| output.stdout)
}

fn main() {
    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let is_optimized = opt_level != "0";

    let version = if is_optimized {
        match git(&["rev-parse", "HEAD"]).and_then(|hash| String::from_utf8(hash).ok()) {
            Some(hash) => {
                let dirty = git(&["status", "--porcelain"]).map_or(false, |status| !status.is_empty());
                if dirty {
                    format!("{} (uncommitted changes)", hash.trim())
                } else {
                    hash.trim().to_string()
                }
            }
            None => "Unknown release".into(),
        }
    } else {
        "Development build".into()
    };

    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
