use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The seven tetromino shapes, named by their letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    pub fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single upcoming piece: a shape plus the unique id it was minted with.
///
/// Ids are assigned by [`PieceGenerator`] and are strictly increasing for
/// the lifetime of the process; a piece never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Mints pieces with uniformly random kinds and sequential ids.
///
/// Owns both the RNG and the next-id counter, so there is no global
/// mutable state; tests construct a seeded generator to get a
/// reproducible piece sequence.
#[derive(Debug)]
pub struct PieceGenerator {
    rng: StdRng,
    next_id: u32,
}

impl PieceGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            next_id: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Produces the next piece. Never fails; ids never repeat.
    pub fn next(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        let id = self.next_id;
        self.next_id += 1;
        Piece { kind, id }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
