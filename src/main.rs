use anyhow::{Context, Result, ensure};
use tracing::info;

use ferrozero_core::State;
use ferrozero_mcts::{ChessBackend, MaterialEvaluator, SearchConfig, Searcher, UniformPolicy};

/// Search a position and print the chosen move.
///
/// Usage: `ferrozero [FEN] [SIMULATIONS]`; defaults to the starting
/// position and 1000 simulations.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let state = match args.next() {
        Some(fen) => fen
            .parse::<State>()
            .with_context(|| format!("invalid FEN \"{fen}\""))?,
        None => State::starting_position(),
    };
    let simulations: u32 = match args.next() {
        Some(n) => n.parse().context("invalid simulation count")?,
        None => SearchConfig::default().simulations,
    };

    ensure!(!state.is_checkmate(), "position is already checkmate");
    ensure!(!state.is_draw(), "position is already drawn");

    info!(side = %state.side_to_move(), simulations, "searching");
    println!("{}", state.pretty());

    let searcher = Searcher::new(SearchConfig {
        simulations,
        ..SearchConfig::default()
    });
    let mut policy = UniformPolicy::new();
    let mut evaluator = MaterialEvaluator;
    let best = searcher.search(&ChessBackend, state, &mut policy, &mut evaluator)?;

    info!(%best, "search complete");
    println!("{best}");
    Ok(())
}
