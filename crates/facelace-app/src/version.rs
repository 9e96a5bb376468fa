//! Build metadata.

/// Returns `pkg_version (git_hash)` for start-up logging and the settings panel.
///
/// The hash is `unknown` when the build had no git metadata, and carries a
/// `-dirty` suffix when the working tree had uncommitted changes.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let dirty = if option_env!("VERGEN_GIT_DIRTY") == Some("true") {
        "-dirty"
    } else {
        ""
    };

    format!("{pkg_version} ({git_hash}{dirty})")
}
