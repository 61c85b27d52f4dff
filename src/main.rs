mod app;
mod catalog;
mod cli;
mod config;
mod consts;
mod discover;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // Status lines are suppressed in JSON mode
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
