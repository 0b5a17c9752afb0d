use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};

use memoarr::core::{GameConfig, Variant, MAX_PLAYERS, MIN_PLAYERS};
use memoarr::effects::{InputError, PositionSource, Prompt};
use memoarr::play::Match;
use memoarr::render::Renderer;
use memoarr::{Position, ROUNDS_PER_GAME};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Plain rules, full grid
    Base,
    /// Plain rules, only revealed cards are drawn
    ExpertDisplay,
    /// Animal effects enabled
    ExpertRules,
}

impl From<Mode> for Variant {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Base => Variant::Base,
            Mode::ExpertDisplay => Variant::ExpertDisplay,
            Mode::ExpertRules => Variant::ExpertRules,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "memoarr", about = "Memoarr memory game for 2-4 players at one terminal")]
struct Args {
    /// Game version
    #[arg(short, long, value_enum, default_value_t = Mode::Base)]
    mode: Mode,

    /// Player name, once per player in seating order (asked for if omitted)
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,
}

/// Players typing at a shared terminal.
struct Terminal<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Terminal<R> {
    fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        match self.lines.next() {
            Some(Ok(line)) => Ok(line.trim().to_string()),
            _ => Err(InputError::Closed),
        }
    }
}

impl<R: BufRead> PositionSource for Terminal<R> {
    fn request_position(&mut self, prompt: Prompt) -> Result<Position, InputError> {
        Ok(self.ask(&prompt.to_string())?.parse()?)
    }

    fn acknowledge(&mut self, prompt: Prompt) -> Result<(), InputError> {
        self.ask(&prompt.to_string()).map(drop)
    }
}

struct Console;

impl Renderer for Console {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

fn ask_players<R: BufRead>(terminal: &mut Terminal<R>) -> anyhow::Result<Vec<String>> {
    let count = loop {
        let answer = terminal.ask(&format!("Number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): "))?;
        match answer.parse::<usize>() {
            Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => break n,
            _ => println!("Please enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}."),
        }
    };

    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let name = terminal.ask(&format!("Name of player {}: ", names.len() + 1))?;
        if name.is_empty() {
            println!("Names cannot be empty.");
        } else {
            names.push(name);
        }
    }
    Ok(names)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock());

    println!("=== MEMOARR ===");
    println!("{ROUNDS_PER_GAME} rounds. Match the animal or the background of the previous card.");

    let names = if args.players.is_empty() {
        ask_players(&mut terminal)?
    } else {
        args.players
    };

    let mut config = GameConfig::new(names).with_variant(args.mode.into());
    config.seed = args.seed;

    let mut game = Match::from_config(&config)?;
    game.play_game(&mut terminal, &mut Console)?;
    Ok(())
}
