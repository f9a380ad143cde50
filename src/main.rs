//! Host-side helper: `cargo run` converts the site's images (favicon sizes and
//! WebP gallery copies) before a deploy.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = landing_fx::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
