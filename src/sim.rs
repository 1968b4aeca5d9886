//! Headless random-versus-random games.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::game::GameEngine;
use crate::player::Player;
use crate::player_ai::RandomAi;
use crate::state::Phase;

/// Summary of a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// `None` if `max_steps` ran out first.
    pub winner: Option<Player>,
    pub steps: usize,
    pub human_bombs: usize,
    pub ai_bombs: usize,
}

/// Play a full game between two `RandomAi`s, each with its own seeded rng.
/// The same seeds always produce the same report.
pub fn simulate(seed_human: u64, seed_ai: u64, max_steps: usize) -> SimReport {
    let engine = GameEngine::new();
    let ai = RandomAi::new();
    let mut rng_human = SmallRng::seed_from_u64(seed_human);
    let mut rng_ai = SmallRng::seed_from_u64(seed_ai);
    let mut state = engine.new_game();
    let mut steps = 0;

    while state.phase != Phase::Idle && steps < max_steps {
        let player = state.turn;
        let rng = match player {
            Player::Human => &mut rng_human,
            Player::Ai => &mut rng_ai,
        };
        let action = ai.pick(rng);
        // Every action is valid and the default engine never rejects input.
        if let Ok(next) = engine.step(&state, player, action) {
            state = next;
        }
        steps += 1;
    }

    SimReport {
        winner: state.winner,
        steps,
        human_bombs: state.board(Player::Human).bombs().len(),
        ai_bombs: state.board(Player::Ai).bombs().len(),
    }
}
