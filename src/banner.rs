use tracing::info;

pub(crate) fn print_banner() {
    info!(
        "🔍 InnerCalm probe v{} (built {} {}, {}) checking local services.",
        env!("CARGO_PKG_VERSION"),
        option_env!("BUILD_DATE").unwrap_or("unknown date"),
        option_env!("BUILD_TIME").unwrap_or("unknown time"),
        commit_label(option_env!("GIT_DIRTY"), option_env!("GIT_COMMIT_SHORT"))
    );
}

fn commit_label(dirty: Option<&'static str>, commit: Option<&'static str>) -> &'static str {
    match (dirty, commit) {
        (Some("false"), Some(commit)) => commit,
        _ => "SNAPSHOT",
    }
}
