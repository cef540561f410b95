use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::warn;
use std::io::{self, Write};
use std::path::PathBuf;
use tictactoe::config::{GameConfig, PlayerKind};
use tictactoe::core::CheckerPair;
use tictactoe::display::{render_banner, render_board};
use tictactoe::game::{Game, MoveLog};
use tictactoe::player::TieBreak;
use tictactoe::selfplay::{run_selfplay, AiSetup, SelfPlayConfig};

/// Picked up from the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "tictactoe.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Tic-Tac-Toe on an N×N board against an alpha-beta AI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// -v for info, -vv for search diagnostics
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game (default)
    Play(PlayArgs),
    /// Pit two AIs against each other over many games
    Selfplay(SelfPlayArgs),
}

#[derive(Args, Debug, Default)]
struct PlayArgs {
    /// JSON game configuration (default: ./tictactoe.json if present); flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width and height
    #[arg(long)]
    dim: Option<usize>,

    /// The two checkers, first player's first (e.g. "XO")
    #[arg(long)]
    checkers: Option<String>,

    #[arg(long, value_enum)]
    p1: Option<PlayerKind>,

    #[arg(long, value_enum)]
    p2: Option<PlayerKind>,

    /// Tie-break for every AI player: first, last or random
    #[arg(long)]
    tiebreak: Option<TieBreak>,

    /// Search depth for every AI player
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for random tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Append a timestamped move journal to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Save the finished game as JSON
    #[arg(long)]
    record: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SelfPlayArgs {
    #[arg(long, default_value_t = 10)]
    games: usize,

    #[arg(long, default_value_t = 3)]
    dim: usize,

    #[arg(long, default_value_t = 9)]
    depth1: u32,

    #[arg(long, default_value_t = 9)]
    depth2: u32,

    #[arg(long, default_value = "random")]
    tiebreak1: TieBreak,

    #[arg(long, default_value = "random")]
    tiebreak2: TieBreak,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the full statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args),
        Command::Selfplay(args) => run_selfplay_cmd(args),
    }
}

fn build_config(args: &PlayArgs) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::load_or_default(DEFAULT_CONFIG),
    };

    if let Some(dim) = args.dim {
        config.board_dim = dim;
    }
    if let Some(symbols) = &args.checkers {
        let chars: Vec<char> = symbols.chars().collect();
        anyhow::ensure!(
            chars.len() == 2,
            "--checkers takes exactly two symbols, got {:?}",
            symbols
        );
        config.checkers = CheckerPair::new(chars[0], chars[1])?;
    }
    for (slot, kind) in [args.p1, args.p2].into_iter().enumerate() {
        if let Some(kind) = kind {
            config.players[slot].kind = kind;
        }
    }
    for player in config.players.iter_mut() {
        if let Some(tiebreak) = args.tiebreak {
            player.tiebreak = tiebreak;
        }
        if let Some(depth) = args.depth {
            player.depth = depth;
        }
        if args.seed.is_some() {
            player.seed = args.seed;
        }
    }

    config.validate()?;
    Ok(config)
}

fn run_play(args: PlayArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    let board = config.build_board()?;

    let mut game = Game::new(board);
    if let Some(path) = &args.log_file {
        let log = MoveLog::create(path)
            .with_context(|| format!("opening move log {}", path.display()))?;
        game = game.with_log(log);
    }

    let [mut p1, mut p2] = config.build_players();

    let mut stdout = io::stdout();
    render_banner(&mut stdout)?;
    for player in [&p1, &p2] {
        println!("{}", player.describe());
    }
    println!();
    render_board(&mut stdout, &game.board, None)?;

    let outcome = game
        .play(p1.as_mut(), p2.as_mut(), |board, mv| {
            let mut out = io::stdout();
            let shown = writeln!(out, "{} places an '{}' at {}.\n", mv.player, mv.checker, mv.coord)
                .and_then(|_| render_board(&mut out, board, Some(mv.coord)));
            if let Err(e) = shown {
                warn!("could not draw the board: {}", e);
            }
        })
        .context("game aborted")?;

    println!("{}", outcome);
    if outcome.winner().is_some() {
        println!("Congratulations!");
    }

    if let Some(path) = &args.record {
        game.to_record(Some(outcome))
            .save(path)
            .with_context(|| format!("saving game record {}", path.display()))?;
    }
    Ok(())
}

fn run_selfplay_cmd(args: SelfPlayArgs) -> anyhow::Result<()> {
    let config = SelfPlayConfig {
        num_games: args.games,
        board_dim: args.dim,
        checkers: CheckerPair::default(),
        ai1: AiSetup {
            tiebreak: args.tiebreak1,
            depth: args.depth1,
        },
        ai2: AiSetup {
            tiebreak: args.tiebreak2,
            depth: args.depth2,
        },
        base_seed: args.seed,
    };

    let stats = run_selfplay(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let pct = |n: usize| n as f64 / stats.total_games.max(1) as f64 * 100.0;
    println!("=== Self-Play Results ===");
    println!("Games: {}", stats.total_games);
    println!("P1 Wins: {} ({:.1}%)", stats.p1_wins, pct(stats.p1_wins));
    println!("P2 Wins: {} ({:.1}%)", stats.p2_wins, pct(stats.p2_wins));
    println!("Ties: {} ({:.1}%)", stats.ties, pct(stats.ties));
    println!("Avg Moves: {:.1}", stats.avg_moves);
    println!("Avg Time: {:.1}ms", stats.avg_time_ms);
    Ok(())
}
