use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use lanes::app::{cli::Cli, run::run};

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LANES_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // Output piped into `head` and friends
        if is_broken_pipe(&err) {
            return;
        }
        tracing::error!(error = %format!("{err:#}"), "lanes failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
