//! Board structure

use super::bitboard::Bitboard;
use super::{is_in_bounds, Player, Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE};

/// Square game board, one occupancy bitboard per colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    size: usize,
}

impl Board {
    /// Empty board of the default size
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Empty `size` x `size` board
    pub fn with_size(size: usize) -> Self {
        debug_assert!(size > 0 && size <= MAX_BOARD_SIZE);
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// True iff `(row, col)` is on this board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        is_in_bounds(row, col, self.size)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.contains(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// True iff in bounds and unoccupied. Off-board coordinates are never empty.
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.stone_at(row, col) == Some(Stone::Empty)
    }

    /// Place a stone.
    ///
    /// The cell must be on the board and empty; callers check this first.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.get(pos) == Stone::Empty, "cell {pos:?} already occupied");
        let idx = pos.to_index(self.size);
        match player {
            Player::Black => self.black.set(idx),
            Player::White => self.white.set(idx),
        }
    }

    /// Get bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Positions of all stones of a player, row-major
    pub fn positions(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.stones(player)
            .iter_ones()
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize >= self.total_cells()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
