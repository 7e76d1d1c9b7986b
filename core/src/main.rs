mod args;
mod engine;

use std::error::Error;
use std::fs::File;

use args::Args;
use clap::Parser;
use log::{info, LevelFilter};
use rules::{CozyPosition, Position};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = engine::configure(&args)?;
    if args.list_options {
        for line in config.describe() {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut position = CozyPosition::from_fen(&args.fen)?;
    let legal_moves = position.legal_moves();

    let mut ai = engine::create(&args, &config).await?;
    info!("mode {:?}", ai.mode());
    let choice = ai.best_move(&args.fen, &legal_moves, &mut position).await?;

    if let Some(reason) = &choice.fallback_reason {
        info!("fell back to local search: {}", reason);
    }
    info!("{:?} chose {}", choice.source, choice.mv);
    println!("{}", choice.mv);

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(log_file) = &args.log_file {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        ));
    }

    CombinedLogger::init(loggers)?;

    Ok(args)
}
