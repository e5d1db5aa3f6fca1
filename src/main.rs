//! Host-side helper: `cargo run` compiles the WASM bundle into `static/pkg`
//! and serves `static/` on a local HTTP server.

use std::env;
use std::process::{Command, Stdio};

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
        }
    }

    let port = env::var("SHADERPAD_PORT").unwrap_or_else(|_| "8000".into());
    println!("Serving http://127.0.0.1:{port} — pick a shader with ?shader=solid|linear|radial|bands|pointer");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    let status = server.wait().expect("http server exited abnormally");
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
}
