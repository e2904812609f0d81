use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod backup;
mod cli;
mod config;
mod demo;
mod editor;
mod eid;
mod errors;
mod filter;
mod html;
mod items;
mod render;
mod search;
mod storage;
#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = app::AppPaths::resolve()?;
    log::debug!("using data directory {}", paths.base_path);

    let app = app::App::open(&paths)?;

    cli::handle(args.command, &app)
}
