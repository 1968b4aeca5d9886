use clap::Parser;
use gridbattle::{
    init_logging, print_help, print_player_view, CliPlayer, Command, Controller, EngineConfig,
    GameEngine, GameHistory, IdlePolicy, Player, RandomAi,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Place four ships, then bomb the AI's fleet.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the random AI in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Reject input from the player who does not hold the turn")]
        strict_turns: bool,
        #[arg(long, help = "Report an error for input after the game is over")]
        reject_after_game_over: bool,
        #[arg(long, help = "Show the AI's ships")]
        debug: bool,
    },
}

/// Wins per player across games in one session.
#[derive(Default)]
struct Score {
    human: u32,
    ai: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            strict_turns,
            reject_after_game_over,
            debug,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (AI will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = EngineConfig {
                enforce_turn: strict_turns,
                idle_policy: if reject_after_game_over {
                    IdlePolicy::Reject
                } else {
                    IdlePolicy::Ignore
                },
            };
            play(GameEngine::with_config(config), &mut rng, debug)?;
        }
    }
    Ok(())
}

fn play(engine: GameEngine, rng: &mut SmallRng, debug: bool) -> anyhow::Result<()> {
    let mut human = CliPlayer::stdin(debug);
    let mut ai = RandomAi::new();
    let mut score = Score::default();
    print_help();

    loop {
        let mut history = GameHistory::new(engine);
        while history.current().winner.is_none() {
            let state = history.current().clone();
            match state.turn {
                Player::Human => match human.read_command(&state)? {
                    Some(Command::Act(action)) => {
                        if let Err(err) = history.apply(Player::Human, action) {
                            println!("{}", err);
                        }
                    }
                    Some(Command::Undo) => {
                        if history.undo_turn(Player::Human) == 0 {
                            println!("Nothing to undo");
                        }
                    }
                    Some(Command::Help) => print_help(),
                    Some(Command::Quit) | None => return Ok(()),
                },
                Player::Ai => {
                    if let Some(action) = ai.next_action(rng, &state, Player::Ai)? {
                        history.apply(Player::Ai, action)?;
                    }
                }
            }
        }

        print_player_view(history.current(), true);
        match history.current().winner {
            Some(Player::Human) => score.human += 1,
            Some(Player::Ai) => score.ai += 1,
            None => {}
        }
        println!(
            "Game ended after {} moves. Score is {}-{}",
            history.len(),
            score.human,
            score.ai
        );
        println!("Press Enter to play again, q to quit.");
        match human.read_line()? {
            Some(line) if line.trim() != "q" => {}
            _ => return Ok(()),
        }
    }
}
