//! Board representation for the 3×3 sliding-tile puzzle
//!
//! A board is a flat, row-major array of nine tile labels. Label 8 is the blank.
//! Boards are `Copy` values: every move produces a new board, so a board can be
//! used directly as a key in visited and closed sets.

use std::fmt;

use crate::{PuzzleError, Result};

/// Label of the blank tile
pub const BLANK: u8 = 8;

/// Width and height of the board
pub const SIDE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIDE * SIDE;

/// Unit moves of the blank as (row, column) offsets: right, left, down, up
const MOVES: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A validated 3×3 puzzle configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board([u8; CELLS]);

impl Board {
    /// The canonical solved board
    pub const GOAL: Board = Board([0, 1, 2, 3, 4, 5, 6, 7, 8]);

    /// Creates a board, checking that `tiles` is a permutation of `0..=8`
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::TileOutOfRange { tile })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile { tile });
            }
            *slot = true;
        }
        Ok(Board(tiles))
    }

    /// Returns the tiles in row-major order
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Returns the index of the blank tile
    pub fn blank_index(&self) -> usize {
        self.position_of(BLANK)
    }

    /// Returns the index holding `tile`
    ///
    /// Every label in `0..=8` occurs exactly once on a validated board.
    pub fn position_of(&self, tile: u8) -> usize {
        self.0.iter().position(|&t| t == tile).unwrap_or(CELLS)
    }

    /// Returns true if this board equals [`Board::GOAL`]
    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Returns the boards reachable by sliding the blank one cell
    ///
    /// Neighbors are generated in the order right, left, down, up, skipping
    /// moves that would leave the board. The result holds 2 to 4 boards.
    pub fn neighbors(&self) -> Vec<Board> {
        let blank = self.blank_index();
        let (row, col) = ((blank / SIDE) as isize, (blank % SIDE) as isize);

        MOVES
            .iter()
            .filter_map(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                let inside = (0..SIDE as isize).contains(&r) && (0..SIDE as isize).contains(&c);
                inside.then(|| self.swapped(blank, r as usize * SIDE + c as usize))
            })
            .collect()
    }

    /// Sum over the eight numbered tiles of the Manhattan distance to the goal position
    ///
    /// The blank is skipped: one move shifts exactly one numbered tile by one
    /// cell, so the estimate never exceeds the true distance and changes by at
    /// most one per move.
    pub fn manhattan_distance(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let goal = Self::GOAL.position_of(tile);
                (index / SIDE).abs_diff(goal / SIDE) + (index % SIDE).abs_diff(goal % SIDE)
            })
            .sum()
    }

    /// Counts pairs of non-blank tiles that appear in the wrong relative order
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| b < a).count())
            .sum()
    }

    /// Returns true if the goal is reachable from this board
    ///
    /// On an odd-width board a blank move never changes inversion parity, and
    /// the goal has zero inversions.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Replays a sequence of blank destination indices
    ///
    /// Fails if any index is not orthogonally adjacent to the blank.
    pub fn apply_moves(&self, moves: &[usize]) -> Result<Board> {
        moves.iter().try_fold(*self, |board, &to| board.slide_blank(to))
    }

    /// Slides the blank into cell `to`
    pub fn slide_blank(&self, to: usize) -> Result<Board> {
        let from = self.blank_index();
        let adjacent = to < CELLS
            && ((from / SIDE == to / SIDE && from.abs_diff(to) == 1)
                || (from % SIDE == to % SIDE && from.abs_diff(to) == SIDE));
        if !adjacent {
            return Err(PuzzleError::IllegalMove { from, to });
        }
        Ok(self.swapped(from, to))
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.0;
        tiles.swap(a, b);
        Board(tiles)
    }
}

/// Returns the boards reachable from `board` by one blank move
pub fn neighbors(board: &Board) -> Vec<Board> {
    board.neighbors()
}

impl Default for Board {
    fn default() -> Self {
        Self::GOAL
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: &[u8]) -> Result<Self> {
        let tiles: [u8; CELLS] = tiles
            .try_into()
            .map_err(|_| PuzzleError::InvalidBoardLength { got: tiles.len() })?;
        Board::new(tiles)
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: Vec<u8>) -> Result<Self> {
        Board::try_from(tiles.as_slice())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SIDE) {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    BLANK => "_".to_string(),
                    t => t.to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
