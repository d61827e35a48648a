mod cli;
mod commands;
mod config;
mod env;
mod error;
mod fs;
mod output;
mod path_ext;
mod post;
mod store;
mod template;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
