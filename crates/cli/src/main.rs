//! Determinism benchmark report CLI entry point.

fn main() {
    if let Err(e) = detbench_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
