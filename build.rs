// Mirror static assets into `dist/` so the packaged site is self-contained.
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).ok();
    }

    let mut options = fs_extra::dir::CopyOptions::new();
    options.copy_inside = true;
    if let Err(err) = fs_extra::dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=failed to mirror static/ into dist/: {err}");
    }
}
