mod app;
mod cli;
mod compose;
mod config;
mod discover;
mod dockerfile;
mod env;
mod error;
mod term;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let cfg = config::get_config(cli);

    if let Err(err) = app::run(&cfg).await {
        term::error(&err.to_string());
        std::process::exit(1);
    }
}
