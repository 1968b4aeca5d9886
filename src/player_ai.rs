use rand::rngs::SmallRng;
use rand::Rng;

use crate::action::Action;
use crate::player::{Controller, Player};
use crate::state::GameState;

/// Opponent that presses a uniformly random key until something sticks.
///
/// Good enough for a 10×10 board: moves wander, and roughly one input in six is
/// a confirm, which the engine rejects while the hot item overlaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }

    /// Draw one action.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        Action::ALL[rng.random_range(0..Action::ALL.len())]
    }
}

impl Controller for RandomAi {
    fn next_action(
        &mut self,
        rng: &mut SmallRng,
        _state: &GameState,
        _player: Player,
    ) -> anyhow::Result<Option<Action>> {
        Ok(Some(self.pick(rng)))
    }
}
