use gridbattle::{Controller, GameEngine, Phase, Player, RandomAi};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let engine = GameEngine::new();
    let mut p1 = RandomAi::new();
    let mut p2 = RandomAi::new();
    let mut state = engine.new_game();

    let mut turns = 0;
    while state.phase != Phase::Idle {
        turns += 1;
        let player = state.turn;
        let controller = match player {
            Player::Human => &mut p1,
            Player::Ai => &mut p2,
        };
        let action = controller
            .next_action(&mut rng, &state, player)
            .unwrap()
            .expect("random ai always answers");
        state = engine.step(&state, player, action).unwrap();
        if turns > 2_000_000 {
            panic!("game took too many turns");
        }
    }
    let winner = state.winner.unwrap();
    assert!(state.board(winner.opponent()).all_sunk());
    assert!(!state.board(winner).all_sunk());
}

#[test]
fn test_pick_covers_every_action() {
    let mut rng = SmallRng::seed_from_u64(9);
    let ai = RandomAi::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(ai.pick(&mut rng));
    }
    assert_eq!(seen.len(), 6);
}
