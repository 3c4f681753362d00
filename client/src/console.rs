use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tictactoe_common::config::GameConfig;
use tictactoe_common::games::tictactoe::{Outcome, TicTacToeGameState, winning_line};
use tictactoe_common::log;

use crate::command::{ClientCommand, HELP, parse_command};

pub async fn run(mut state: TicTacToeGameState, config: &GameConfig) -> std::io::Result<()> {
    let delay = Duration::from_millis(config.computer_delay_ms);
    let mut next_size = state.size() as i64;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    if state.is_engine_turn() {
        computer_turn(&mut state, delay).await;
    }
    render(&state);

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(ClientCommand::Place(mv)) => {
                match state.play_human_move(mv) {
                    Ok(Outcome::None) => {
                        render(&state);
                        computer_turn(&mut state, delay).await;
                    }
                    Ok(_) => {}
                    Err(e) => println!("{}", e),
                }
                render(&state);
            }
            Ok(ClientCommand::SetSize(size)) => {
                next_size = size;
                println!("Board size {} will be used on reset", size);
            }
            Ok(ClientCommand::Reset) => match state.reset(next_size) {
                Ok(()) => {
                    if state.is_engine_turn() {
                        computer_turn(&mut state, delay).await;
                    }
                    render(&state);
                }
                Err(e) => println!("{}", e),
            },
            Ok(ClientCommand::Help) => println!("{}", HELP),
            Ok(ClientCommand::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

async fn computer_turn(state: &mut TicTacToeGameState, delay: Duration) {
    tokio::time::sleep(delay).await;

    match state.play_computer_move() {
        Ok(Some(mv)) => println!("Computer plays {}", mv),
        Ok(None) => println!("No move left for the computer"),
        Err(e) => log!("Computer could not move: {}", e),
    }
}

fn render(state: &TicTacToeGameState) {
    println!();
    print!("{}", state.board);
    if let Some(line) = winning_line(&state.board) {
        println!("Line from {} to {}", line.start, line.end);
    }
    println!("{}", state.status_line());
}
