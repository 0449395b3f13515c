use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use twenty48_core::engine::Direction;
use twenty48_host::{Config, HostSession, build_session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Seed for tile spawns (overrides the config file)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

enum Command {
    Move(Direction),
    NewGame,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" | "restart" => Command::NewGame,
        other => Direction::from_key(other).map_or(Command::Unknown, Command::Move),
    }
}

fn render(out: &mut impl Write, session: &HostSession) -> io::Result<()> {
    let snap = session.snapshot();
    writeln!(out)?;
    write!(out, "{}", snap.grid)?;
    writeln!(out, "score: {}   best: {}", snap.score, snap.best_score)?;
    if snap.game_over {
        writeln!(out, "game over! [n]ew game or [q]uit")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default(args.config.as_deref())?;
    if let Some(path) = &args.config {
        info!("using configuration file: {}", path.display());
    }
    let mut session = build_session(&config, args.seed);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    render(&mut out, &session)?;
    writeln!(out, "move with w/a/s/d, h/j/k/l or up/down/left/right; n = new game, q = quit")?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::NewGame => session.new_game(),
            Command::Move(dir) if !session.snapshot().game_over => {
                if !session.apply(dir).moved {
                    writeln!(out, "can't move {dir}")?;
                }
            }
            Command::Move(_) => {}
            Command::Unknown => {
                writeln!(out, "unknown input {:?}", line.trim())?;
                continue;
            }
        }
        render(&mut out, &session)?;
    }
    info!("final best score {}", session.best_score());
    Ok(())
}
