//! versecopy command-line entry point. All of the work happens in [`cli`].

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
