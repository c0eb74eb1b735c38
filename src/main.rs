//! GoPass-Rust command line interface.
//!
//! ## Usage
//!
//! - `gopass-rust` - Run a short scripted demo
//! - `gopass-rust session` - Interactive session on stdin
//! - `gopass-rust derive --seed "..." D4 Q16 ...` - One-shot derivation

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gopass_rust::cli::Session;
use gopass_rust::constants::{DEFAULT_BOARD_SIZE, DEFAULT_CHARS_PER_MOVE};
use gopass_rust::encode::SymbolPolicy;
use gopass_rust::game::Game;
use gopass_rust::password::{PasswordOptions, derive_password};
use gopass_rust::record::{Move, parse_vertex};

/// GoPass-Rust: a Go game that pays out a password
#[derive(Parser)]
#[command(name = "gopass-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session on stdin
    Session {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        cols: usize,
    },
    /// Play a fixed move sequence and print the derived password
    Derive {
        /// Seed phrase for the encoder
        #[arg(long, default_value = "")]
        seed: String,
        /// Which character classes the password may contain
        #[arg(long, value_enum, default_value_t = SymbolArg::All)]
        symbols: SymbolArg,
        /// Characters generated per move
        #[arg(long, default_value_t = DEFAULT_CHARS_PER_MOVE)]
        chars_per_move: usize,
        /// Moves in vertex notation, e.g. D4 Q16 pass
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Run a short scripted demo
    Demo,
}

#[derive(ValueEnum, Copy, Clone)]
enum SymbolArg {
    All,
    Some,
    None,
}

impl From<SymbolArg> for SymbolPolicy {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::All => SymbolPolicy::AllSymbols,
            SymbolArg::Some => SymbolPolicy::SomeSymbols,
            SymbolArg::None => SymbolPolicy::NoSymbols,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    match cli.command {
        Some(Commands::Session { rows, cols }) => {
            let mut session = Session::new(rows, cols);
            session.run();
            Ok(())
        }
        Some(Commands::Derive {
            seed,
            symbols,
            chars_per_move,
            moves,
        }) => run_derive(&seed, symbols.into(), chars_per_move, &moves),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_derive(
    seed: &str,
    policy: SymbolPolicy,
    chars_per_move: usize,
    moves: &[String],
) -> anyhow::Result<()> {
    let mut game = Game::new(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE);
    for mv in moves {
        match parse_vertex(mv, DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE) {
            Some(Move::Pass) => game.pass()?,
            Some(Move::Play { row, col }) => game.play(row, col)?,
            None => anyhow::bail!("invalid vertex: {mv}"),
        }
    }

    let options = PasswordOptions {
        seed_phrase: seed,
        chars_per_move,
        policy,
    };
    let derived = derive_password(game.move_log(), &options)?;

    println!("{}", derived.password);
    if derived.short_password {
        eprintln!("WARNING: this password is short");
    }
    if derived.no_seed {
        eprintln!("NOTE: no seed used");
    }
    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("GoPass-Rust: a Go game that pays out a password\n");

    // Black surrounds the white stone at (4, 4) and captures it.
    let mut game = Game::new(9, 9);
    for &(row, col) in &[(3, 4), (4, 4), (4, 3), (8, 8), (4, 5), (7, 8), (5, 4)] {
        game.play(row, col)?;
    }

    println!("{}", game.board());
    println!(
        "black captured {} stones, white captured {}",
        game.black_captures(),
        game.white_captures()
    );

    let options = PasswordOptions::new("example seed");
    let derived = derive_password(game.move_log(), &options)?;
    println!("derived password: {}", derived.password);
    if derived.short_password {
        println!("(short: only {} moves were played)", game.move_log().len());
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
