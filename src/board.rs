//! Per-player board: placed and pending ships, dropped bombs and the hot bomb.

use alloc::vec::Vec;

use crate::bomb::Bomb;
use crate::config::{FLEET, FLEET_SIZE};
use crate::ship::Ship;

/// Outcome of a single ship taking a bomb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Impact {
    pub id: alloc::string::String,
    pub sunk: bool,
}

/// One player's side of the game.
///
/// The head of `unplaced_ships` is the hot ship; it alone carries a meaningful
/// `overlapping` marker. `bombs` are the bombs this player has dropped on the
/// opponent, `unplaced_bomb` is the one currently being aimed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    ships: Vec<Ship>,
    unplaced_ships: Vec<Ship>,
    bombs: Vec<Bomb>,
    unplaced_bomb: Bomb,
}

impl Board {
    /// Board with the whole fleet waiting in the staging cell.
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            unplaced_ships: FLEET.iter().copied().map(Ship::staged).collect(),
            bombs: Vec::new(),
            unplaced_bomb: Bomb::staged(),
        }
    }

    /// Board whose fleet is already placed as given.
    pub(crate) fn placed(ships: Vec<Ship>) -> Self {
        Board {
            ships,
            unplaced_ships: Vec::new(),
            bombs: Vec::new(),
            unplaced_bomb: Bomb::staged(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn unplaced_ships(&self) -> &[Ship] {
        &self.unplaced_ships
    }

    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    pub fn unplaced_bomb(&self) -> &Bomb {
        &self.unplaced_bomb
    }

    /// The ship currently being positioned, if any remain.
    pub fn hot_ship(&self) -> Option<&Ship> {
        self.unplaced_ships.first()
    }

    /// Returns `true` once every ship of the fleet has been confirmed.
    pub fn fleet_placed(&self) -> bool {
        self.ships.len() == FLEET_SIZE
    }

    /// Returns `true` when the full fleet is placed and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet_placed() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Returns `true` if this player already dropped a bomb on (`x`, `y`).
    pub fn bomb_at(&self, x: i32, y: i32) -> bool {
        self.bombs.iter().any(|b| b.position() == (x, y))
    }

    pub(crate) fn hot_ship_mut(&mut self) -> Option<&mut Ship> {
        self.unplaced_ships.first_mut()
    }

    pub(crate) fn hot_bomb_mut(&mut self) -> &mut Bomb {
        &mut self.unplaced_bomb
    }

    /// Clamp the hot ship onto the board and re-evaluate its overlap marker.
    pub(crate) fn refresh_hot_ship(&mut self) {
        if let Some(hot) = self.unplaced_ships.first_mut() {
            let mut ship = hot.clone().clamped();
            ship.mark_overlapping(&self.ships);
            *hot = ship;
        }
    }

    /// Re-evaluate whether the hot bomb sits on an already bombed cell.
    pub(crate) fn refresh_hot_bomb(&mut self) {
        let (x, y) = self.unplaced_bomb.position();
        let overlapping = self.bomb_at(x, y);
        self.unplaced_bomb.set_overlapping(overlapping);
    }

    /// Move the hot ship into the placed fleet. Overlap is the caller's check.
    pub(crate) fn confirm_hot_ship(&mut self) -> Option<&Ship> {
        if self.unplaced_ships.is_empty() {
            return None;
        }
        let ship = self.unplaced_ships.remove(0);
        self.ships.push(ship);
        self.ships.last()
    }

    /// Apply an incoming bomb to every ship of this board, returning the ships hit.
    pub(crate) fn absorb(&mut self, bomb: &Bomb) -> Vec<Impact> {
        self.ships
            .iter_mut()
            .filter_map(|ship| {
                if ship.register_hit(bomb) {
                    Some(Impact {
                        id: ship.id().into(),
                        sunk: ship.is_sunk(),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Record a dropped bomb and bring a fresh hot bomb to the default cell.
    pub(crate) fn record_bomb(&mut self, bomb: Bomb) {
        self.bombs.push(bomb);
        self.unplaced_bomb = Bomb::staged();
        self.refresh_hot_bomb();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
