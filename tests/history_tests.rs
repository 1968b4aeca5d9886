use gridbattle::{Action, EngineConfig, GameEngine, GameError, GameHistory, Player};

#[test]
fn test_apply_and_undo() {
    let mut history = GameHistory::new(GameEngine::new());
    assert!(history.is_empty());
    let opening = history.current().clone();

    history.apply(Player::Human, Action::Right).unwrap();
    history.apply(Player::Human, Action::Confirm).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.current().turn, Player::Ai);

    assert_eq!(history.undo(), Some((Player::Human, Action::Confirm)));
    assert_eq!(history.current().turn, Player::Human);
    assert_eq!(history.undo(), Some((Player::Human, Action::Right)));
    assert_eq!(history.current(), &opening);
    assert_eq!(history.undo(), None);
    assert_eq!(history.current(), &opening);
}

#[test]
fn test_undo_turn_skips_opponent_moves() {
    let mut history = GameHistory::new(GameEngine::new());
    history.apply(Player::Human, Action::Confirm).unwrap();
    history.apply(Player::Ai, Action::Left).unwrap();
    history.apply(Player::Ai, Action::Down).unwrap();
    history.apply(Player::Ai, Action::Confirm).unwrap();
    assert_eq!(history.current().turn, Player::Human);

    assert_eq!(history.undo_turn(Player::Human), 4);
    assert!(history.is_empty());
}

#[test]
fn test_rejected_input_not_recorded() {
    let engine = GameEngine::with_config(EngineConfig::strict());
    let mut history = GameHistory::new(engine);
    let err = history.apply(Player::Ai, Action::Up).unwrap_err();
    assert_eq!(
        err,
        GameError::OutOfTurn {
            expected: Player::Human,
            actual: Player::Ai
        }
    );
    assert!(history.is_empty());
}

#[test]
fn test_replay_reproduces_state() {
    let engine = GameEngine::new();
    let mut history = GameHistory::new(engine);
    let script = [
        (Player::Human, Action::Up),
        (Player::Human, Action::Rotate),
        (Player::Human, Action::Confirm),
        (Player::Ai, Action::Right),
        (Player::Ai, Action::Confirm),
        (Player::Human, Action::Confirm),
        (Player::Human, Action::Down),
    ];
    for (player, action) in script {
        history.apply(player, action).unwrap();
    }
    let replayed = GameHistory::replay(engine, history.moves()).unwrap();
    assert_eq!(replayed.current(), history.current());
    assert_eq!(replayed.moves(), history.moves());
}
