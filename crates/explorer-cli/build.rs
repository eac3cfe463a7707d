use std::process::Command;

fn define_git_sha() {
    // Builds from a source tarball have no repository to ask
    let git_sha = Command::new("git")
        .arg("rev-parse")
        .arg("HEAD")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=GIT_SHA={git_sha}");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    define_git_sha();
}
