//! `wordfreq`: print the ten most frequent content words of a text.
mod cli;
mod config;
mod logging;
mod run;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    let settings = run::Settings::resolve(cli, config);
    logging::initialize(settings.log_destination, settings.log_level);
    run::run(&settings)
}
