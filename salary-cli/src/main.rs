use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use salary_cli::{
    cli::{Cli, Command},
    commands,
    config::CliConfig,
    logging::{LogOptions, init_logging, level_for_verbosity},
};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("cannot load configuration")?;
    init_logging(&LogOptions {
        level: Some(level_for_verbosity(cli.verbose, config.log_level.as_deref())),
        file: cli.log_file.clone().or_else(|| config.log_file.clone()),
    })?;
    debug!(?config, "configuration loaded");

    let currency = config.currency_code();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Net(args) => commands::net(args.gross, args.format(), currency, &mut out),
        Command::Brackets(args) => match args.verify {
            Some(path) => commands::verify_brackets(&path, &mut out),
            None => commands::brackets(args.csv, currency, &mut out),
        },
        Command::Curve(args) => {
            let spec = config.curve_spec(args.start, args.end, args.points);
            commands::curve(&spec, args.output.as_deref(), currency, &mut out)
        }
        Command::Batch(args) => commands::batch(&args.input, args.output.as_deref(), &mut out),
        Command::Interactive => commands::interactive(io::stdin().lock(), currency, &mut out),
    }
}
