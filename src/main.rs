use clap::Parser;
use tracing_subscriber::EnvFilter;
use tui_diagrams::cli::{Args, run};

fn main() {
    let args = Args::parse();

    // --verbose forces debug, otherwise RUST_LOG decides
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
