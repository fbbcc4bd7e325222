//! Host-side helper: `cargo run` packages the LED wall with wasm-pack into
//! `static/pkg` and serves `static/` locally so a video can be dropped in.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: &str = "8000";

fn main() {
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors; see output above.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/); serving existing static/pkg.");
        }
    }

    let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    println!("Serving static/ at http://127.0.0.1:{port} …");
    let mut server = match Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            std::process::exit(1);
        }
    };

    // Keep process alive while the server runs
    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                eprintln!("http server exited: {status}");
                std::process::exit(status.code().unwrap_or(1));
            }
            Ok(None) => thread::sleep(Duration::from_secs(1)),
            Err(e) => {
                eprintln!("lost track of http server: {e}");
                std::process::exit(1);
            }
        }
    }
}
