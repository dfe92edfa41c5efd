use anyhow::Context as _;
use colored::Colorize;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match switchyard::config::load_settings().context("failed to load settings") {
        Ok((settings, _)) => settings,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            process::exit(switchyard::cli::exit::FAILURE);
        }
    };

    process::exit(switchyard::cli::run(settings));
}
