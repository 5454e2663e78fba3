//! Seeded random-vs-random demo game.
//!
//! Usage: `self_play [seed]`. Prints the match transcript, the final board,
//! and the outcome.

use plum_gammon::engines::engine_random::RandomEngine;
use plum_gammon::utils::match_harness::{run_match, MatchConfig, MatchOutcome};
use plum_gammon::utils::render_game_state::render_game_state;

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);

    let mut white = RandomEngine::seeded(seed);
    let mut black = RandomEngine::seeded(seed ^ 0x5bd1_e995);
    let config = MatchConfig {
        seed,
        ..MatchConfig::default()
    };

    match run_match(&mut white, &mut black, &config) {
        Ok(result) => {
            for line in &result.transcript {
                println!("{line}");
            }
            println!();
            println!("{}", render_game_state(&result.final_state));
            println!(
                "turns: {}  forfeited: {}",
                result.turn_count, result.forfeited_turns
            );
            if result.outcome == MatchOutcome::Unfinished {
                std::process::exit(2);
            }
        }
        Err(err) => {
            eprintln!("match failed: {err}");
            std::process::exit(1);
        }
    }
}
