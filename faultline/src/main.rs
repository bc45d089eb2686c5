#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;

use args::{Args, Command};
use clap::Parser;
use faultline_config::Config;
use faultline_stack::StackFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    faultline_telemetry::init(&config.telemetry)?;
    faultline_stack::install(StackFilter::new(&config.stack));

    tracing::debug!(
        config_path = args.config.as_ref().map(|path| path.display().to_string()),
        "starting faultline"
    );

    match args.command {
        Command::Kinds { accept_language } => print!("{}", commands::kinds(&accept_language)),
        Command::Translate { id, accept_language } => println!("{}", commands::translate_id(id, &accept_language)),
        Command::Decode { file } => {
            let body = commands::read_input(file.as_deref())?;
            println!("{}", commands::decode(&body)?);
        }
        Command::Check => println!("{}", commands::describe(&config)),
    }

    Ok(())
}
