use std::fs;
use std::path::Path;

// Pulls the built frontend bundle into static/ so include_dir! can embed it.
// When the frontend has not been built yet, the committed placeholder under
// static/dist is embedded instead.
fn main() {
    let static_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(static_dir);
        fs::create_dir_all(static_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            static_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
