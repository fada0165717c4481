//! rWorkhours main entrypoint.

use rworkhours::run;
use rworkhours::ui::messages::error;

fn main() {
    // Diagnostics only; RUST_LOG=debug to see them
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
