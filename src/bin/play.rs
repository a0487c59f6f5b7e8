//! Interactive game loop: one line of input per round, text rendering of
//! the structured reports. All game logic lives in the library.

use std::error::Error;
use std::io::{self, BufRead, Write};

use rps_referee::{GameConfig, GameSession, Player, RoundOutcome, TurnReport, Verdict};
use tracing_subscriber::EnvFilter;

const RULES: &str = "Rules:\n\
    - Best of 3 rounds\n\
    - Moves: rock, paper, scissors, bomb (once)\n\
    - Bomb beats everything\n\
    - Invalid input wastes the round";

fn render(report: &TurnReport, max_rounds: u32) -> String {
    match report {
        TurnReport::Played {
            round,
            user_move,
            bot_move,
            outcome,
            scores,
        } => {
            let winner = match outcome {
                RoundOutcome::Winner(p) => p.to_string(),
                RoundOutcome::Draw => "draw".to_string(),
            };
            format!(
                "Round {round}/{max_rounds}\n\
                 You played: {user_move}\n\
                 Bot played: {bot_move}\n\
                 Winner: {winner}\n\
                 Score -> You: {} | Bot: {}",
                scores[Player::User],
                scores[Player::Bot],
            )
        }
        TurnReport::Wasted {
            round,
            reason,
            bot_move,
            ..
        } => {
            format!(
                "Round {round}/{max_rounds}\n\
                 {reason}. Round wasted.\n\
                 Bot played: {bot_move}"
            )
        }
        TurnReport::Finished { verdict, scores } => {
            let result = match verdict {
                Verdict::Winner(Player::User) => "You win",
                Verdict::Winner(Player::Bot) => "Bot wins",
                Verdict::Draw => "Draw",
            };
            format!(
                "Game over. Final result: {result}\n\
                 Score -> You: {} | Bot: {}",
                scores[Player::User],
                scores[Player::Bot],
            )
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GameConfig::default();
    let mut session = GameSession::new(&config);

    println!("{RULES}");

    let stdin = io::stdin();
    loop {
        print!("\nYour move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let report = session.play_turn(&line);
        println!("{}", render(&report, config.max_rounds()));

        if matches!(report, TurnReport::Finished { .. }) {
            break;
        }

        if session.is_finished() {
            // Last round just played; fetch and render the verdict.
            let verdict = session.play_turn("");
            println!("\n{}", render(&verdict, config.max_rounds()));
            break;
        }
    }

    Ok(())
}
