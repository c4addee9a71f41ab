use crate::display;
use crate::error::GameError;
use crate::game::Game;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\
================= STRATEGIC OPTIONS =================
Code | Action
-----------------------------------------------------
  1  | Play next piece (dequeue and refill)
  2  | Reserve piece (queue -> reserve)
  3  | Use reserved piece (pop reserve)
  4  | Swap one (queue front <-> reserve top)
  5  | Swap three (3 queue <-> 3 reserve)
  0  | Exit
=====================================================";

/// One menu command, parsed from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Play,
    Reserve,
    UseReserved,
    SwapOne,
    SwapThree,
    Exit,
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Non-numeric input and out-of-range codes both land here.
        match s.trim() {
            "1" => Ok(Choice::Play),
            "2" => Ok(Choice::Reserve),
            "3" => Ok(Choice::UseReserved),
            "4" => Ok(Choice::SwapOne),
            "5" => Ok(Choice::SwapThree),
            "0" => Ok(Choice::Exit),
            other => Err(GameError::InvalidInput {
                input: other.to_string(),
            }),
        }
    }
}

/// The interactive loop: render state, show the menu, read one command,
/// dispatch it. Every error is reported in place and the loop continues;
/// only the exit command or end of input leaves the loop.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(output)?;
        write!(output, "{}", display::format_state(game))?;
        writeln!(output, "{MENU}")?;
        write!(output, "Choose an action code: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // EOF behaves like the exit command.
            None => break,
        };

        match line.parse::<Choice>() {
            Ok(choice) => {
                if !dispatch(game, choice, output)? {
                    break;
                }
            }
            Err(err) => report_error(output, &err)?,
        }
    }
    Ok(())
}

/// Runs one command against the game; returns `false` when the loop
/// should stop.
fn dispatch<W: Write>(game: &mut Game, choice: Choice, output: &mut W) -> io::Result<bool> {
    let outcome = match choice {
        Choice::Exit => {
            writeln!(output, "\nPiece manager closed. Good game!")?;
            return Ok(false);
        }
        Choice::Play => game.play().map(|removal| {
            let mut msg = format!("Played {} from the front of the queue.", removal.piece);
            for piece in &removal.refilled {
                msg.push_str(&format!("\n  [REFILL] {piece} joined the rear of the queue."));
            }
            msg
        }),
        Choice::Reserve => game.reserve_piece().map(|removal| {
            let mut msg = format!("Reserved {} (moved from queue to reserve).", removal.piece);
            for piece in &removal.refilled {
                msg.push_str(&format!("\n  [REFILL] {piece} joined the rear of the queue."));
            }
            msg
        }),
        Choice::UseReserved => game
            .use_reserved()
            .map(|piece| format!("Used reserved piece {piece}.")),
        Choice::SwapOne => game.swap_one().map(|report| {
            format!(
                "Swapped: queue front is now {}, reserve top is now {}.",
                report.queue_front, report.stack_top
            )
        }),
        Choice::SwapThree => game
            .swap_three()
            .map(|_| "Swapped the first three queue pieces with the reserve.".to_string()),
    };

    match outcome {
        Ok(msg) => writeln!(output, "\n{} {}", "✓".green(), msg)?,
        Err(err) => report_error(output, &err)?,
    }
    Ok(true)
}

fn report_error<W: Write>(output: &mut W, err: &GameError) -> io::Result<()> {
    writeln!(output, "\n{} {}", "✗".red(), err)
}
