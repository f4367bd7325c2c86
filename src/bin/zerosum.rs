//! zerosum CLI - play Tic-Tac-Toe between pluggable policies and compare
//! the two search algorithms
//!
//! `play` wires a game to two policies (human, random, or search-backed) and
//! reports the outcome from the first mover's perspective. `bench` walks the
//! perfect-play line and prints minimax and alpha-beta node counts side by
//! side: same decisions, different work.

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use zerosum::game::{Game, Outcome};
use zerosum::policy::{AlphaBeta, Human, Minimax, Policy, Random};
use zerosum::search;
use zerosum::tictactoe::TicTacToe;

#[derive(Parser)]
#[command(name = "zerosum")]
#[command(version, about = "Adversarial search playground for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between two policies
    Play(PlayArgs),

    /// Compare minimax and alpha-beta on the same positions
    Bench(BenchArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Policy for the first mover (X)
    #[arg(long, value_enum, default_value_t = PolicyKind::Human)]
    first: PolicyKind,

    /// Policy for the second mover (O)
    #[arg(long, value_enum, default_value_t = PolicyKind::AlphaBeta)]
    second: PolicyKind,

    /// Seed for random policies; unseeded when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct BenchArgs {
    /// Stop after this many plies of the perfect-play line
    #[arg(long, default_value_t = 9)]
    plies: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    /// Prompt for moves on stdin as row,col
    Human,
    /// Uniform random over the legal moves
    Random,
    /// Exhaustive minimax search
    Minimax,
    /// Alpha-beta pruned search
    AlphaBeta,
}

fn build_policy(kind: PolicyKind, seed: Option<u64>) -> Box<dyn Policy<TicTacToe>> {
    match kind {
        PolicyKind::Human => Box::new(Human::new(io::stdin().lock(), io::stdout())),
        PolicyKind::Random => Box::new(match seed {
            Some(seed) => Random::seeded(seed),
            None => Random::from_os(),
        }),
        PolicyKind::Minimax => Box::new(Minimax),
        PolicyKind::AlphaBeta => Box::new(AlphaBeta),
    }
}

fn execute_play(args: PlayArgs) -> Result<()> {
    let game = TicTacToe;
    let mut first = build_policy(args.first, args.seed);
    let mut second = build_policy(args.second, args.seed.map(|s| s.wrapping_add(1)));

    let utility = zerosum::play(&game, first.as_mut(), second.as_mut(), &mut io::stdout())?;

    match Outcome::from_utility(utility) {
        Outcome::FirstWins => println!("X wins."),
        Outcome::SecondWins => println!("O wins."),
        Outcome::Draw => println!("Draw."),
    }
    Ok(())
}

fn print_kv(key: &str, value: &str) {
    println!("  {:24} {}", format!("{key}:"), value);
}

fn execute_bench(args: BenchArgs) -> Result<()> {
    let game = TicTacToe;
    let mut state = game.initial();

    for ply in 0..args.plies {
        if game.is_final(&state) {
            break;
        }

        let mm = search::minimax(&game, &state)?;
        let ab = search::alpha_beta(&game, &state)?;

        println!("\nply {ply} ({} to move)", game.player(&state));
        print_kv("minimax", &format!("{} ({}), {} nodes", mm.action, mm.value, mm.nodes));
        print_kv("alpha-beta", &format!("{} ({}), {} nodes", ab.action, ab.value, ab.nodes));
        print_kv(
            "nodes saved",
            &format!("{:.1}%", 100.0 * (1.0 - ab.nodes as f64 / mm.nodes as f64)),
        );

        state = game.result(&state, &ab.action)?;
    }

    println!("\nfinal position:\n{}", game.render(&state));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => execute_play(args),
        Commands::Bench(args) => execute_bench(args),
    }
}
