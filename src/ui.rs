#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    config::BOARD_SIZE,
    player::Player,
    ship::Ship,
    state::{GameState, Phase},
};

/// Render `player`'s board as text.
///
/// The human's ships are always drawn; the AI's stay hidden unless sunk or
/// `reveal` is set. The hot ship shows only while its owner holds the turn. The
/// bombs on this board are the ones the opponent dropped, plus the opponent's
/// hot bomb while the opponent is aiming.
///
/// Legend: `.` water, `S` ship, `*` sunk ship, `#` hot ship, `X` hit,
/// `o` miss, `+` hot bomb, `!` hot item on an occupied spot.
pub fn render_board(state: &GameState, player: Player, reveal: bool) -> String {
    let size = BOARD_SIZE as usize;
    let mut grid = vec![vec!['.'; size]; size];
    let board = state.board(player);
    let opponent = state.board(player.opponent());

    let mut paint = |x: i32, y: i32, ch: char| {
        if (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y) {
            grid[(y - 1) as usize][(x - 1) as usize] = ch;
        }
    };
    let mut paint_ship = |ship: &Ship, ch: char| {
        let bbox = ship.bbox();
        for y in bbox.y1..=bbox.y2 {
            for x in bbox.x1..=bbox.x2 {
                paint(x, y, ch);
            }
        }
    };

    for ship in board.ships() {
        if ship.is_sunk() {
            paint_ship(ship, '*');
        } else if player == Player::Human || reveal {
            paint_ship(ship, 'S');
        }
    }
    if state.turn == player && (player == Player::Human || reveal) {
        if let Some(hot) = board.hot_ship() {
            paint_ship(hot, if hot.is_overlapping() { '!' } else { '#' });
        }
    }

    for bomb in opponent.bombs() {
        let (x, y) = bomb.position();
        paint(x, y, if bomb.is_hit() { 'X' } else { 'o' });
    }
    if state.turn != player && state.phase == Phase::PlacingBombs {
        let hot = opponent.unplaced_bomb();
        let (x, y) = hot.position();
        paint(x, y, if hot.is_overlapping() { '!' } else { '+' });
    }

    let mut out = String::new();
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in grid.iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for ch in row {
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Print both boards with a status line.
pub fn print_player_view(state: &GameState, reveal: bool) {
    println!("\nYour fleet:");
    print!("{}", render_board(state, Player::Human, reveal));
    println!("\nEnemy waters:");
    print!("{}", render_board(state, Player::Ai, reveal));
    println!("\n{}", status_line(state));
}

/// One-line description of whose move it is and what they are doing.
pub fn status_line(state: &GameState) -> String {
    match (state.phase, state.winner) {
        (Phase::Idle, Some(winner)) => format!("Game over, {} wins", winner),
        (Phase::PlacingShips, _) => match state.board(state.turn).hot_ship() {
            Some(ship) => format!(
                "{} is placing {} (size {})",
                state.turn,
                ship.id(),
                ship.size()
            ),
            None => format!("{} is waiting for the other fleet", state.turn),
        },
        _ => {
            let (x, y) = state.board(state.turn).unplaced_bomb().position();
            format!(
                "{} is aiming at {}{}",
                state.turn,
                (b'A' + (x - 1) as u8) as char,
                y
            )
        }
    }
}
