//! Command-line host for the chess engine
//!
//! ```text
//! rookery analyze --fen "<FEN>" --time-ms 500
//! rookery moves --fen "<FEN>"
//! rookery selfplay --plies 20 --depth 4
//! ```
//!
//! Logging goes to stderr and is filtered with `RUST_LOG` (default `info`).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chess_engine::constants::START_FEN;
use chess_engine::{CacheKind, Engine, EngineConfig, Position, SearchOutcome, Searcher};

#[derive(Parser)]
#[command(name = "rookery")]
#[command(version, about = "Analyze chess positions and watch the engine play itself")]
struct Cli {
    /// JSON engine configuration; missing fields take their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Transposition cache eviction policy
    #[arg(long, global = true, value_enum)]
    cache: Option<CacheArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a position and print the best move
    Analyze {
        #[arg(long, default_value = START_FEN)]
        fen: String,

        /// Time budget in milliseconds
        #[arg(long)]
        time_ms: Option<u64>,

        /// Maximum search depth
        #[arg(long)]
        depth: Option<u32>,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the legal moves of a position
    Moves {
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },
    /// Let the engine play against itself
    Selfplay {
        /// Start position; defaults to the configured one
        #[arg(long)]
        fen: Option<String>,

        /// Stop after this many plies
        #[arg(long, default_value_t = 40)]
        plies: u32,

        /// Fixed depth per move instead of the time budget
        #[arg(long)]
        depth: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CacheArg {
    Lru,
    ClearWhenFull,
}

impl From<CacheArg> for CacheKind {
    fn from(arg: CacheArg) -> Self {
        match arg {
            CacheArg::Lru => CacheKind::Lru,
            CacheArg::ClearWhenFull => CacheKind::ClearWhenFull,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(cache) = cli.cache {
        config.cache.kind = cache.into();
    }

    match cli.command {
        Command::Analyze {
            fen,
            time_ms,
            depth,
            json,
        } => {
            if let Some(time_ms) = time_ms {
                config.search_time_ms = time_ms;
            }
            if let Some(depth) = depth {
                config.max_depth = depth;
            }
            analyze(&config, &fen, json)
        }
        Command::Moves { fen } => list_moves(&fen),
        Command::Selfplay { fen, plies, depth } => {
            if let Some(fen) = fen {
                config.start_position = fen;
            }
            selfplay(config, plies, depth)
        }
    }
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn analyze(config: &EngineConfig, fen: &str, json: bool) -> Result<()> {
    config.validate().context("Invalid engine configuration")?;
    let pos = Position::from_fen(fen).context("Invalid --fen")?;
    let mut searcher = Searcher::from_config(config);

    let outcome = futures_lite::future::block_on(searcher.search(
        &pos,
        config.search_limits(),
        |report| {
            if !json {
                println!(
                    "depth {:>2}  score {:>6}  nodes {:>9}  hits {:>8}  {}",
                    report.depth, report.score, report.nodes, report.cache_hits, report.best_move
                );
            }
            async {}
        },
    ));

    let SearchOutcome::BestMove(report) = outcome else {
        let verdict = if pos.in_check(pos.turn()) {
            "checkmate"
        } else {
            "stalemate"
        };
        if json {
            println!("{}", serde_json::json!({ "best_move": null, "result": verdict }));
        } else {
            println!("no legal move ({verdict})");
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "bestmove {} score {} depth {} nodes {} cache hits {} stopped by {:?} in {} ms",
            report.best_move,
            report.score,
            report.depth,
            report.nodes,
            report.cache_hits,
            report.stop_reason,
            report.elapsed.as_millis()
        );
    }
    Ok(())
}

fn list_moves(fen: &str) -> Result<()> {
    let pos = Position::from_fen(fen).context("Invalid --fen")?;
    let moves = pos.legal_moves();
    let names: Vec<String> = moves.iter().map(ToString::to_string).collect();
    println!("{} legal moves", moves.len());
    if !names.is_empty() {
        println!("{}", names.join(" "));
    }
    Ok(())
}

fn selfplay(config: EngineConfig, plies: u32, depth: Option<u32>) -> Result<()> {
    if depth == Some(0) {
        bail!("--depth must be at least 1");
    }
    let mut engine = Engine::new(config).context("Invalid engine configuration")?;
    info!(fen = %engine.fen(), plies, "Self-play started");

    for ply in 1..=plies {
        if engine.winner().is_some() {
            break;
        }
        let Some(report) = engine.ai_move_blocking(depth) else {
            break;
        };
        println!(
            "{ply:>3}. {}  (score {}, depth {})",
            report.best_move, report.score, report.depth
        );
    }

    println!("final position: {}", engine.fen());
    match engine.winner() {
        Some(winner) => println!("result: {winner}"),
        None => println!("result: unfinished"),
    }
    Ok(())
}
