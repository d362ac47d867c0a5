//! Freedom in the terminal
//!
//! Player 1 types `row col` at the prompt, Player 2 is the computer.
//! The game ends when the board is full.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use freedom::config::{init_tracing, Config};
use freedom::game::{GameState, GameStatus, Outcome};
use freedom::{AIEngine, MoveError, Player};

const INPUT_HELP: &str = "
 :: Something is wrong with your input. Ensure that:

    1. You entered integer values that do not exceed board size
    2. You enter coordinates that have a stone adjacent to it unless you have freedom

[Press ENTER to continue]";

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level);

    let mut engine = config.engine();
    let mut state = GameState::new(config.difficulty);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    while let GameStatus::InProgress = state.status() {
        refresh_screen(&mut out, &state)?;

        let next = match state.current {
            Player::One => match prompt_human(&mut input, &mut out, &state)? {
                Some(next) => next,
                // stdin closed
                None => return Ok(()),
            },
            Player::Two => {
                let pos = engine
                    .get_move(&state)
                    .context("no move available on a non-full board")?;
                state.place(pos)?
            }
        };
        state = next;
    }

    refresh_screen(&mut out, &state)?;
    if let GameStatus::Complete(outcome) = state.status() {
        writeln!(out, "\n{}\n", announcement(&outcome))?;
    }
    Ok(())
}

/// Clear the terminal and show scoreboard, move counter and board.
fn refresh_screen(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    // ANSI clear screen + cursor home
    write!(out, "\x1B[2J\x1B[H")?;

    let scores = state.scores();
    writeln!(out, "------ Scoreboard ------")?;
    writeln!(out, "{} {}: {}", Player::One.symbol(), Player::One.name(), scores.one)?;
    writeln!(out, "{} {}: {}", Player::Two.symbol(), Player::Two.name(), scores.two)?;
    writeln!(out, "------------------------\n")?;

    writeln!(out, "Move: {}", state.move_count)?;
    match state.last_placed {
        Some(pos) => writeln!(out, "Last Placed: {pos}\n")?,
        None => writeln!(out, "Last Placed: -\n")?,
    }
    write!(out, "{}", state.board)?;
    out.flush()
}

/// Ask Player 1 for a move until a legal one is entered.
///
/// Returns `None` when input runs out.
fn prompt_human(
    input: &mut impl BufRead,
    out: &mut impl Write,
    state: &GameState,
) -> Result<Option<GameState>> {
    loop {
        write!(
            out,
            "\n{}, where would you like to place a stone? ",
            state.current.name()
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_move(state, &line) {
            Ok(next) => return Ok(Some(next)),
            Err(err) => {
                tracing::debug!(%err, input = line.trim(), "rejected move");
                writeln!(out, "\n :: {err}")?;
                writeln!(out, "{INPUT_HELP}")?;
                out.flush()?;
                if read_line(input)?.is_none() {
                    return Ok(None);
                }
                refresh_screen(out, state)?;
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read from stdin")?;
    Ok((n > 0).then_some(line))
}

/// Split a `row col` line and validate it against the game.
fn parse_move(state: &GameState, line: &str) -> Result<GameState, MoveError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(row), Some(col), None) => state.play(row, col),
        _ => Err(MoveError::Parse {
            token: line.trim().to_string(),
        }),
    }
}

fn announcement(outcome: &Outcome) -> &'static str {
    match outcome.winner {
        Some(Player::One) => "Player 1 wins the game!",
        Some(Player::Two) => "Player 2 wins the game!",
        None => "It's a draw!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freedom::{Difficulty, Pos, ScorePair};

    #[test]
    fn test_parse_move_accepts_two_tokens() {
        let state = GameState::new(Difficulty::Beginner);
        let next = parse_move(&state, " 2 3\n").unwrap();
        assert_eq!(next.last_placed, Some(Pos::new(2, 3)));
    }

    #[test]
    fn test_parse_move_rejects_wrong_token_count() {
        let state = GameState::new(Difficulty::Beginner);
        assert!(matches!(parse_move(&state, "2\n"), Err(MoveError::Parse { .. })));
        assert!(matches!(parse_move(&state, "1 2 3\n"), Err(MoveError::Parse { .. })));
        assert!(matches!(parse_move(&state, "a a\n"), Err(MoveError::Parse { .. })));
    }

    #[test]
    fn test_prompt_reprompts_then_accepts() {
        let state = GameState::new(Difficulty::Beginner).play("2", "2").unwrap();
        // Bad move, ENTER to continue, then a legal neighbor
        let mut input = io::Cursor::new("5 5\n\n2 1\n");
        let mut out = Vec::new();

        let next = prompt_human(&mut input, &mut out, &state).unwrap().unwrap();
        assert_eq!(next.last_placed, Some(Pos::new(2, 1)));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("not adjacent"));
        assert!(printed.contains("Player 2, where would you like to place a stone?"));
    }

    #[test]
    fn test_prompt_stops_on_eof() {
        let state = GameState::new(Difficulty::Beginner);
        let mut input = io::Cursor::new("");
        let mut out = Vec::new();
        assert!(prompt_human(&mut input, &mut out, &state).unwrap().is_none());
    }

    #[test]
    fn test_screen_shows_scoreboard_and_board() {
        let state = GameState::new(Difficulty::Beginner).play("0", "0").unwrap();
        let mut out = Vec::new();
        refresh_screen(&mut out, &state).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("------ Scoreboard ------"));
        assert!(printed.contains("● Player 1: 0"));
        assert!(printed.contains("Move: 1"));
        assert!(printed.contains("Last Placed: (0, 0)"));
        assert!(printed.contains("● * * * * *"));
    }

    #[test]
    fn test_announcement() {
        let win = Outcome::from_scores(ScorePair::new(1, 0));
        assert_eq!(announcement(&win), "Player 1 wins the game!");
        let draw = Outcome::from_scores(ScorePair::new(2, 2));
        assert_eq!(announcement(&draw), "It's a draw!");
    }
}
