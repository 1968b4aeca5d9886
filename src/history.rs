//! Move history with undo and deterministic replay.

use alloc::vec::Vec;

use crate::action::Action;
use crate::common::GameError;
use crate::game::GameEngine;
use crate::player::Player;
use crate::state::GameState;

/// Sequence of snapshots produced by one engine, starting at a fresh game.
#[derive(Debug, Clone)]
pub struct GameHistory {
    engine: GameEngine,
    snapshots: Vec<GameState>,
    moves: Vec<(Player, Action)>,
}

impl GameHistory {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            snapshots: alloc::vec![engine.new_game()],
            engine,
            moves: Vec::new(),
        }
    }

    /// Latest snapshot.
    pub fn current(&self) -> &GameState {
        // Never empty: `undo` keeps the opening snapshot.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Inputs applied so far, oldest first.
    pub fn moves(&self) -> &[(Player, Action)] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Step the current snapshot and record the result. On error nothing is recorded.
    pub fn apply(&mut self, player: Player, action: Action) -> Result<&GameState, GameError> {
        let next = self.engine.step(self.current(), player, action)?;
        self.snapshots.push(next);
        self.moves.push((player, action));
        Ok(self.current())
    }

    /// Drop the latest move. Returns the undone move, or `None` at the opening position.
    pub fn undo(&mut self) -> Option<(Player, Action)> {
        let last = self.moves.pop()?;
        self.snapshots.pop();
        Some(last)
    }

    /// Undo moves until it is `player`'s turn again with at least one of their
    /// own moves removed. Returns the number of moves undone.
    pub fn undo_turn(&mut self, player: Player) -> usize {
        let mut undone = 0;
        while let Some((mover, _)) = self.undo() {
            undone += 1;
            if mover == player && self.current().turn == player {
                break;
            }
        }
        undone
    }

    /// Re-run `moves` from a fresh game through `engine`.
    pub fn replay(engine: GameEngine, moves: &[(Player, Action)]) -> Result<Self, GameError> {
        let mut history = GameHistory::new(engine);
        for &(player, action) in moves {
            history.apply(player, action)?;
        }
        Ok(history)
    }
}
