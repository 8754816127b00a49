fn main() {
    if let Err(e) = bundlescope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
