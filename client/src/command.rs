use tictactoe_common::games::tictactoe::{Move, parse_board_size};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    Place(Move),
    SetSize(i64),
    Reset,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        ["quit" | "exit" | "q"] => Ok(ClientCommand::Quit),
        ["help" | "?"] => Ok(ClientCommand::Help),
        ["reset"] => Ok(ClientCommand::Reset),
        ["size", value] => parse_board_size(value)
            .map(ClientCommand::SetSize)
            .map_err(|e| e.to_string()),
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Invalid row '{}'", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Invalid column '{}'", col))?;
            Ok(ClientCommand::Place(Move::new(row, col)))
        }
        _ => Err(format!("Unknown command '{}', type 'help' for commands", line.trim())),
    }
}

pub const HELP: &str = "Commands:
  <row> <col>   place your mark (0-based)
  size <n>      board size used by the next reset
  reset         start a new game
  help          show this help
  quit          leave";
