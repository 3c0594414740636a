// Copies the static page (index.html plus any prebuilt pkg/) to `dist/`.
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut opts = fs_extra::dir::CopyOptions::new();
        opts.content_only = true;
        opts.overwrite = true;
        if let Err(err) = fs_extra::dir::copy(static_dir, out_dir, &opts) {
            println!("cargo:warning=copying static assets failed: {err}");
        }
    }
}
