fn main() {
    build_data::set_BUILD_DATE();
    build_data::set_BUILD_TIME();
    // Outside a git checkout these are left unset and the banner says SNAPSHOT.
    if let (Ok(commit), Ok(dirty)) = (build_data::get_git_commit_short(), build_data::get_git_dirty()) {
        println!("cargo:rustc-env=GIT_COMMIT_SHORT={commit}");
        println!("cargo:rustc-env=GIT_DIRTY={dirty}");
    }
}
