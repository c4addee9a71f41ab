use crate::game::{Game, PieceQueue, ReserveStack};
use std::fmt::Write;

// Rendering stays plain text; the menu layer adds color only to its own
// feedback lines.

pub fn format_queue(queue: &PieceQueue) -> String {
    let mut line = format!(
        "Next pieces (front -> rear) [{}/{}]: ",
        queue.len(),
        queue.capacity()
    );
    if queue.is_empty() {
        line.push_str("[EMPTY]");
    } else {
        join_pieces(&mut line, queue.iter());
    }
    line
}

pub fn format_stack(stack: &ReserveStack) -> String {
    let mut line = format!(
        "Reserve (top -> base)       [{}/{}]: ",
        stack.len(),
        stack.capacity()
    );
    if stack.is_empty() {
        line.push_str("[EMPTY]");
    } else {
        join_pieces(&mut line, stack.iter());
    }
    line
}

pub fn format_state(game: &Game) -> String {
    format!(
        "--- CURRENT PIECES ---\n{}\n{}\n",
        format_queue(game.queue()),
        format_stack(game.reserve())
    )
}

fn join_pieces<'a>(out: &mut String, pieces: impl Iterator<Item = &'a crate::piece::Piece>) {
    let mut first = true;
    for piece in pieces {
        if !first {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{piece}");
        first = false;
    }
}
