//! Embeds the trunk-built frontend.
//!
//! When `../frontend/dist` exists it replaces `static/dist`, which is what
//! `include_dir!` picks up. Without a frontend build the checked-in
//! placeholder page is served instead.

use std::fs;
use std::path::Path;

fn main() {
    let dist_dir = Path::new("../frontend/dist");
    let static_dir = Path::new("static");
    let embedded_dir = static_dir.join("dist");

    if dist_dir.join("index.html").exists() {
        if embedded_dir.exists() {
            fs::remove_dir_all(&embedded_dir).expect("failed to clear static/dist");
        }
        fs::create_dir_all(static_dir).expect("failed to create static/");
        fs_extra::dir::copy(
            dist_dir,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("failed to copy frontend/dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
