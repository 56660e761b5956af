//! `drupal-cleanup` command-line entry point.

use anyhow::Result;
use clap::Parser;

use drupal_cleanup::commands::install::Event;
use drupal_cleanup::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    match args.command {
        cli::Command::Install(opts) => {
            commands::install::run(&args.global, &opts, Event::Install, &log)
        }
        cli::Command::Update(opts) => {
            commands::install::run(&args.global, &opts, Event::Update, &log)
        }
        cli::Command::All => commands::all::run(&args.global, &log),
        cli::Command::Clean(opts) => commands::clean::run(&args.global, &opts, &log),
        cli::Command::Rules(opts) => commands::rules::run(&args.global, &opts, &log),
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
