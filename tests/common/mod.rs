#![allow(dead_code)]

use gridbattle::{Action, GameEngine, GameState, Phase, Player};

/// Press `action` for `player` `times` times.
pub fn press(engine: &GameEngine, state: GameState, player: Player, action: Action, times: usize) -> GameState {
    (0..times).fold(state, |s, _| engine.step(&s, player, action).unwrap())
}

/// Both players stack their fleets horizontally at x = 3 on rows 1..=4, Human
/// first, alternating after each confirm. Ends in the bombing phase, Human to move.
pub fn place_both_fleets(engine: &GameEngine) -> GameState {
    let mut state = engine.new_game();
    for i in 0..4 {
        for player in Player::BOTH {
            state = match i {
                0 => press(engine, state, player, Action::Up, 2),
                1 => press(engine, state, player, Action::Up, 1),
                2 => state,
                _ => press(engine, state, player, Action::Down, 1),
            };
            state = engine.step(&state, player, Action::Confirm).unwrap();
        }
    }
    assert_eq!(state.phase, Phase::PlacingBombs);
    state
}

/// Walk `player`'s hot bomb to (`x`, `y`) and confirm.
pub fn bomb(engine: &GameEngine, mut state: GameState, player: Player, x: i32, y: i32) -> GameState {
    let (cx, cy) = state.board(player).unplaced_bomb().position();
    let (h, dx) = if x >= cx { (Action::Right, x - cx) } else { (Action::Left, cx - x) };
    let (v, dy) = if y >= cy { (Action::Down, y - cy) } else { (Action::Up, cy - y) };
    state = press(engine, state, player, h, dx as usize);
    state = press(engine, state, player, v, dy as usize);
    engine.step(&state, player, Action::Confirm).unwrap()
}

/// Cells covered by the fleet layout of `place_both_fleets`.
pub fn stacked_fleet_cells() -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for (row, size) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
        for x in 3..3 + size {
            cells.push((x, row));
        }
    }
    cells
}

/// Cells no stacked fleet touches, for the side that should keep missing.
pub fn miss_cells() -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for y in 7..=10 {
        for x in 1..=10 {
            cells.push((x, y));
        }
    }
    cells
}

/// Human sinks the AI's stacked fleet while the AI misses every time.
/// Returns the state right after the winning bomb.
pub fn human_wins(engine: &GameEngine) -> GameState {
    let mut state = place_both_fleets(engine);
    let targets = stacked_fleet_cells();
    let misses = miss_cells();
    for (i, &(x, y)) in targets.iter().enumerate() {
        state = bomb(engine, state, Player::Human, x, y);
        if i + 1 < targets.len() {
            let (mx, my) = misses[i];
            state = bomb(engine, state, Player::Ai, mx, my);
        }
    }
    state
}
