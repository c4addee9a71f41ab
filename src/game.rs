use crate::error::GameError;
use crate::piece::{Piece, PieceGenerator};
use crate::queue::CircularQueue;
use crate::stack::BoundedStack;

pub const QUEUE_CAPACITY: usize = 5;
pub const RESERVE_CAPACITY: usize = 3;
/// Number of pieces exchanged by the block swap.
pub const SWAP_BLOCK: usize = 3;

pub type PieceQueue = CircularQueue<Piece, QUEUE_CAPACITY>;
pub type ReserveStack = BoundedStack<Piece, RESERVE_CAPACITY>;

/// Result of an action that removed a piece from the queue: the piece
/// itself plus whatever the generator minted to top the queue back up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub piece: Piece,
    pub refilled: Vec<Piece>,
}

/// Result of the single swap: the piece now at the queue front and the
/// piece now on top of the reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    pub queue_front: Piece,
    pub stack_top: Piece,
}

/// The whole game state: upcoming pieces, reserved pieces, and the
/// generator that mints new ones.
///
/// Every method either succeeds or returns a [`GameError`] leaving both
/// containers exactly as they were. Any removal from the queue is
/// followed by a top-up, so callers always observe the queue at capacity
/// between commands.
#[derive(Debug)]
pub struct Game {
    queue: PieceQueue,
    reserve: ReserveStack,
    generator: PieceGenerator,
}

impl Game {
    /// Starts a game with the queue filled to capacity.
    pub fn new(mut generator: PieceGenerator) -> Self {
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            if queue.enqueue(generator.next()).is_err() {
                break;
            }
        }
        Self {
            queue,
            reserve: ReserveStack::new(),
            generator,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        queue: PieceQueue,
        reserve: ReserveStack,
        generator: PieceGenerator,
    ) -> Self {
        Self {
            queue,
            reserve,
            generator,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    fn top_up(&mut self) -> Vec<Piece> {
        let mut added = Vec::new();
        while !self.queue.is_full() {
            let piece = self.generator.next();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
            added.push(piece);
        }
        added
    }

    /// Plays the piece at the front of the queue and tops the queue up.
    pub fn play(&mut self) -> Result<Removal, GameError> {
        let piece = self.queue.dequeue().ok_or(GameError::QueueEmpty)?;
        let refilled = self.top_up();
        Ok(Removal { piece, refilled })
    }

    /// Moves the front of the queue onto the reserve stack.
    ///
    /// The stack-full check comes before the queue-empty check, so a full
    /// reserve is reported even when the queue also has nothing to give.
    pub fn reserve_piece(&mut self) -> Result<Removal, GameError> {
        if self.reserve.is_full() {
            return Err(GameError::StackFull);
        }
        let piece = self.queue.dequeue().ok_or(GameError::QueueEmpty)?;
        // Cannot fail: the stack was checked non-full above.
        self.reserve.push(piece).map_err(|_| GameError::StackFull)?;
        let refilled = self.top_up();
        Ok(Removal { piece, refilled })
    }

    /// Pops and returns the top of the reserve stack.
    pub fn use_reserved(&mut self) -> Result<Piece, GameError> {
        self.reserve.pop().ok_or(GameError::StackEmpty)
    }

    /// Exchanges the queue front and the reserve top in place.
    ///
    /// Neither container changes size; the two slots simply trade pieces.
    pub fn swap_one(&mut self) -> Result<SwapReport, GameError> {
        let top = self.reserve.peek_mut().ok_or(GameError::StackEmpty)?;
        let front = self.queue.front_mut().ok_or(GameError::QueueEmpty)?;
        std::mem::swap(front, top);
        Ok(SwapReport {
            queue_front: *front,
            stack_top: *top,
        })
    }

    /// Block-exchanges the first three queue slots with the three reserved
    /// pieces.
    ///
    /// Afterwards the queue's front three slots hold the former stack
    /// contents base-to-top, and popping the reserve three times yields
    /// the former queue pieces in their original front-to-back order.
    pub fn swap_three(&mut self) -> Result<(), GameError> {
        if self.queue.len() < SWAP_BLOCK {
            return Err(GameError::QueueTooShort {
                needed: SWAP_BLOCK,
                available: self.queue.len(),
            });
        }
        if self.reserve.len() < SWAP_BLOCK {
            return Err(GameError::StackTooShort {
                needed: SWAP_BLOCK,
                available: self.reserve.len(),
            });
        }

        // Pop yields top-to-base; reversed, that is base-to-top for the
        // queue side.
        let mut reserved = Vec::with_capacity(SWAP_BLOCK);
        while reserved.len() < SWAP_BLOCK {
            match self.reserve.pop() {
                Some(piece) => reserved.push(piece),
                None => break,
            }
        }
        reserved.reverse();

        let mut displaced = Vec::with_capacity(SWAP_BLOCK);
        for (i, piece) in reserved.into_iter().enumerate() {
            if let Some(slot) = self.queue.get_mut(i) {
                displaced.push(std::mem::replace(slot, piece));
            }
        }

        // Push rear-most first so pops come back in front-to-back order.
        for piece in displaced.into_iter().rev() {
            let _ = self.reserve.push(piece); // three slots were freed above
        }
        Ok(())
    }
}
