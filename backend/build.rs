use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../frontend/dist");

    let dist_dir = Path::new("../frontend/dist");
    if !dist_dir.exists() {
        // No frontend build present; keep the committed static files.
        return;
    }

    let out_dir = Path::new("static");
    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).unwrap();
    fs_extra::dir::copy(
        dist_dir,
        out_dir,
        &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
    )
    .unwrap();
}
