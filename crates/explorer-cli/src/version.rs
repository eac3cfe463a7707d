use lazy_static::lazy_static;

lazy_static! {
    static ref VERSION_STR: String = env!("CARGO_PKG_VERSION").to_string();
    static ref GIT_SHA: String = env!("GIT_SHA").to_string();
}

/// Returns the version of explorer that was built.
pub fn explorer_version_str() -> &'static str {
    &VERSION_STR
}

/// Returns the git sha of the build.
pub fn git_sha() -> &'static str {
    &GIT_SHA
}
