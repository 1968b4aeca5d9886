//! The step function: turns a snapshot plus one player input into the next snapshot.

use alloc::vec::Vec;

use log::{debug, info};

use crate::action::Action;
use crate::bomb::Bomb;
use crate::common::GameError;
use crate::config::{EngineConfig, IdlePolicy};
use crate::event::GameEvent;
use crate::player::Player;
use crate::state::{GameState, Phase};

/// Result of a successful step: the successor snapshot and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Core game logic. Holds only validation policy, never game state, so one
/// engine can drive any number of independent games.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    /// Engine with the permissive default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Fresh canonical opening position.
    pub fn new_game(&self) -> GameState {
        info!("New game was started");
        GameState::new()
    }

    /// Apply `action` by `player` to `state`, returning the successor.
    pub fn step(
        &self,
        state: &GameState,
        player: Player,
        action: Action,
    ) -> Result<GameState, GameError> {
        self.step_with_events(state, player, action).map(|t| t.state)
    }

    /// Parse a raw action name and step. Unknown names yield `InvalidAction`.
    pub fn step_input(
        &self,
        state: &GameState,
        player: Player,
        input: &str,
    ) -> Result<GameState, GameError> {
        let action: Action = input.parse()?;
        self.step(state, player, action)
    }

    /// Like [`GameEngine::step`], also returning the events raised on the way.
    pub fn step_with_events(
        &self,
        state: &GameState,
        player: Player,
        action: Action,
    ) -> Result<Transition, GameError> {
        if state.phase == Phase::Idle {
            return match self.config.idle_policy {
                IdlePolicy::Ignore => Ok(Transition {
                    state: state.clone(),
                    events: Vec::new(),
                }),
                IdlePolicy::Reject => Err(GameError::InvalidPhase),
            };
        }
        if self.config.enforce_turn && player != state.turn {
            return Err(GameError::OutOfTurn {
                expected: state.turn,
                actual: player,
            });
        }

        debug!("{} sent {} during {:?}", player, action, state.phase);
        let mut next = state.clone();
        let mut events = Vec::new();
        match next.phase {
            Phase::PlacingShips => {
                apply_placement(&mut next, player, action, &mut events);
                if Player::BOTH.iter().all(|&p| next.boards[p].fleet_placed()) {
                    next.phase = Phase::PlacingBombs;
                    info!("Both fleets placed, bombing starts");
                    events.push(GameEvent::BombingStarted);
                }
            }
            Phase::PlacingBombs => apply_bombing(&mut next, player, action, &mut events),
            Phase::Idle => {}
        }
        detect_winner(&mut next, &mut events);
        Ok(Transition {
            state: next,
            events,
        })
    }
}

/// Fresh canonical opening position.
pub fn new_game() -> GameState {
    GameEngine::new().new_game()
}

/// Step with the default permissive engine.
pub fn step(state: &GameState, player: Player, action: Action) -> Result<GameState, GameError> {
    GameEngine::new().step(state, player, action)
}

/// Placement-phase handler on its own: moves, rotates or confirms the hot ship.
pub fn handle_placement(state: &GameState, player: Player, action: Action) -> GameState {
    let mut next = state.clone();
    apply_placement(&mut next, player, action, &mut Vec::new());
    next
}

/// Bombing-phase handler on its own: moves or drops the hot bomb.
pub fn handle_bombing(state: &GameState, player: Player, action: Action) -> GameState {
    let mut next = state.clone();
    apply_bombing(&mut next, player, action, &mut Vec::new());
    next
}

/// Drop `bomb` for `player` on the opponent's fleet, regardless of the hot bomb.
pub fn place_bomb(state: &GameState, player: Player, bomb: Bomb) -> GameState {
    let mut next = state.clone();
    drop_bomb(&mut next, player, bomb, &mut Vec::new());
    next
}

/// Re-derive the hot item's clamp and overlap markers for `player`.
pub fn hot_item_accounting(state: &GameState, player: Player) -> GameState {
    let mut next = state.clone();
    refresh_hot_item(&mut next, player);
    next
}

/// Hand the turn to the other player.
pub fn pass_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    toggle_turn(&mut next, &mut Vec::new());
    next
}

fn apply_placement(
    state: &mut GameState,
    player: Player,
    action: Action,
    events: &mut Vec<GameEvent>,
) {
    let board = &mut state.boards[player];
    match action {
        Action::Confirm => {
            let Some(hot) = board.hot_ship() else {
                return;
            };
            if hot.is_overlapping() {
                debug!("{} cannot place {}, it overlaps", player, hot.id());
                events.push(GameEvent::PlacementRejected {
                    player,
                    id: hot.id().into(),
                });
                return;
            }
            if let Some(ship) = board.confirm_hot_ship() {
                events.push(GameEvent::ShipPlaced {
                    player,
                    id: ship.id().into(),
                });
            }
            toggle_turn(state, events);
        }
        Action::Rotate => {
            if let Some(ship) = board.hot_ship_mut() {
                ship.rotate();
            }
        }
        Action::Up | Action::Down | Action::Left | Action::Right => {
            if let (Some(ship), Some((dx, dy))) = (board.hot_ship_mut(), action.delta()) {
                ship.nudge(dx, dy);
            }
        }
    }
    refresh_hot_item(state, player);
}

fn apply_bombing(
    state: &mut GameState,
    player: Player,
    action: Action,
    events: &mut Vec<GameEvent>,
) {
    match action {
        Action::Confirm => {
            let hot = *state.boards[player].unplaced_bomb();
            let (x, y) = hot.position();
            if hot.is_overlapping() {
                debug!("{} already bombed ({}, {})", player, x, y);
                events.push(GameEvent::BombRejected { player, x, y });
                return;
            }
            drop_bomb(state, player, hot, events);
            toggle_turn(state, events);
            return;
        }
        Action::Rotate => {}
        Action::Up | Action::Down | Action::Left | Action::Right => {
            if let Some((dx, dy)) = action.delta() {
                let bomb = state.boards[player].hot_bomb_mut();
                bomb.nudge(dx, dy);
                *bomb = bomb.clamped();
            }
        }
    }
    refresh_hot_item(state, player);
}

fn refresh_hot_item(state: &mut GameState, player: Player) {
    match state.phase {
        Phase::PlacingShips => state.boards[player].refresh_hot_ship(),
        Phase::PlacingBombs => state.boards[player].refresh_hot_bomb(),
        Phase::Idle => {}
    }
}

fn drop_bomb(state: &mut GameState, player: Player, mut bomb: Bomb, events: &mut Vec<GameEvent>) {
    let owner = player.opponent();
    let impacts = state.boards[owner].absorb(&bomb);
    if !impacts.is_empty() {
        bomb.mark_hit();
    }
    let (x, y) = bomb.position();
    events.push(GameEvent::BombDropped {
        player,
        x,
        y,
        hit: bomb.is_hit(),
    });
    for impact in impacts {
        debug!("{}'s {} was hit", owner, impact.id);
        if impact.sunk {
            info!("{}'s {} was sunk", owner, impact.id);
            events.push(GameEvent::ShipHit {
                owner,
                id: impact.id.clone(),
            });
            events.push(GameEvent::ShipSunk { owner, id: impact.id });
        } else {
            events.push(GameEvent::ShipHit { owner, id: impact.id });
        }
    }
    state.boards[player].record_bomb(bomb);
}

fn toggle_turn(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.turn = state.turn.opponent();
    events.push(GameEvent::TurnPassed { to: state.turn });
}

fn detect_winner(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for player in Player::BOTH {
        if state.boards[player].all_sunk() {
            let winner = player.opponent();
            state.winner = Some(winner);
            state.phase = Phase::Idle;
            info!("Player {} wins", winner);
            events.push(GameEvent::GameWon { winner });
        }
    }
}
