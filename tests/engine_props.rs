use gridbattle::{Action, GameEngine, GameState, Phase, Player, BOARD_SIZE, FLEET_SIZE};
use proptest::prelude::*;

fn any_input() -> impl Strategy<Value = (Player, Action)> {
    (any::<bool>(), 0..Action::ALL.len()).prop_map(|(human, i)| {
        let player = if human { Player::Human } else { Player::Ai };
        (player, Action::ALL[i])
    })
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.winner.is_some(), state.phase == Phase::Idle);
    let both_placed = Player::BOTH.iter().all(|&p| state.board(p).fleet_placed());
    match state.phase {
        Phase::PlacingShips => prop_assert!(!both_placed),
        Phase::PlacingBombs => prop_assert!(both_placed),
        Phase::Idle => {}
    }
    for player in Player::BOTH {
        let board = state.board(player);
        prop_assert_eq!(board.ships().len() + board.unplaced_ships().len(), FLEET_SIZE);
        let mut sizes: Vec<_> = board
            .ships()
            .iter()
            .chain(board.unplaced_ships())
            .map(|s| s.size())
            .collect();
        sizes.sort_unstable();
        prop_assert_eq!(sizes, vec![2, 3, 4, 5]);
        for ship in board.ships() {
            prop_assert!(ship.hits() <= ship.size());
            prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.size());
        }
        for (i, a) in board.ships().iter().enumerate() {
            for b in &board.ships()[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
        if let Some(hot) = board.hot_ship() {
            prop_assert_eq!(hot.clone().clamped(), hot.clone());
        }
        let (x, y) = board.unplaced_bomb().position();
        prop_assert!((1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y));
        let mut cells: Vec<_> = board.bombs().iter().map(|b| b.position()).collect();
        let dropped = cells.len();
        cells.sort_unstable();
        cells.dedup();
        prop_assert_eq!(cells.len(), dropped);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Arbitrary input from either player, in or out of turn, keeps every
    /// structural invariant and never touches the input snapshot.
    #[test]
    fn random_inputs_keep_invariants(inputs in prop::collection::vec(any_input(), 0..400)) {
        let engine = GameEngine::new();
        let mut state = engine.new_game();
        for (player, action) in inputs {
            let before = state.clone();
            let next = engine.step(&state, player, action).unwrap();
            prop_assert_eq!(&state, &before);
            check_invariants(&next)?;
            if next.turn != state.turn {
                prop_assert_eq!(action, Action::Confirm);
            }
            state = next;
        }
    }

    /// A rejected confirm never advances the turn.
    #[test]
    fn turn_only_passes_on_accepted_confirm(inputs in prop::collection::vec(any_input(), 0..200)) {
        let engine = GameEngine::new();
        let mut state = engine.new_game();
        for (player, action) in inputs {
            let t = engine.step_with_events(&state, player, action).unwrap();
            let passed = t.state.turn != state.turn;
            let placed = t.events.iter().any(|e| matches!(
                e,
                gridbattle::GameEvent::ShipPlaced { .. } | gridbattle::GameEvent::BombDropped { .. }
            ));
            prop_assert_eq!(passed, placed);
            state = t.state;
        }
    }
}
