//! Board representation for Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;
/// Largest supported board, one column per letter `A`-`Z` (see `ui::theme::column_label`)
pub const MAX_BOARD_SIZE: usize = 26;
/// Smallest supported board
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 676

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

/// A side in the game. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl From<Player> for Stone {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major cell index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step `steps` cells along `(dr, dc)`, `None` if that leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        if is_in_bounds(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

/// True iff `(row, col)` lies on a `size` x `size` board
#[inline]
pub fn is_in_bounds(row: i32, col: i32, size: usize) -> bool {
    row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
