//! Interactive manager for a Tetris-style "next pieces" queue.
//!
//! A fixed-capacity circular queue holds the upcoming pieces and a small
//! bounded stack holds reserved ones; a numeric menu plays, reserves, or
//! swaps pieces between the two. The containers are generic and the game
//! layer wires them to the piece generator.

pub mod display;
pub mod error;
pub mod game;
pub mod menu;
pub mod piece;
pub mod queue;
pub mod stack;

pub use error::GameError;
pub use game::{Game, PieceQueue, ReserveStack, QUEUE_CAPACITY, RESERVE_CAPACITY, SWAP_BLOCK};
pub use piece::{Piece, PieceGenerator, PieceKind};
pub use queue::CircularQueue;
pub use stack::BoundedStack;
