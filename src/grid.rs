use rand::Rng;

use crate::direction::Direction;

/// Board coordinate, 0-indexed from the top-left corner.
///
/// Coordinates are signed so a candidate move off the board is representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Fixed square board whose outermost ring is solid wall.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self { size }
    }

    /// Side length of the board, walls included.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns true when the cell lies inside `[0, N)` on both axes.
    #[must_use]
    pub fn is_in_bounds(self, cell: Cell) -> bool {
        let size = i32::from(self.size);
        cell.row >= 0 && cell.col >= 0 && cell.row < size && cell.col < size
    }

    /// Returns true when the cell is on the outermost ring.
    #[must_use]
    pub fn is_wall(self, cell: Cell) -> bool {
        let last = i32::from(self.size) - 1;
        self.is_in_bounds(cell)
            && (cell.row == 0 || cell.col == 0 || cell.row == last || cell.col == last)
    }

    /// Returns true when the snake may legally occupy the cell.
    #[must_use]
    pub fn is_interior(self, cell: Cell) -> bool {
        self.is_in_bounds(cell) && !self.is_wall(cell)
    }

    /// Number of playable cells, i.e. `(N - 2)^2`.
    #[must_use]
    pub fn interior_cell_count(self) -> usize {
        let side = usize::from(self.size.saturating_sub(2));
        side * side
    }

    #[must_use]
    pub fn center(self) -> Cell {
        let mid = i32::from(self.size / 2);
        Cell::new(mid, mid)
    }

    /// Draws a uniformly random interior cell.
    ///
    /// The grid must have at least one interior cell.
    pub fn random_interior_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let upper = i32::from(self.size) - 1;
        Cell::new(rng.gen_range(1..upper), rng.gen_range(1..upper))
    }

    /// Iterates interior cells in row-major order.
    pub fn interior_cells(self) -> impl Iterator<Item = Cell> {
        let upper = i32::from(self.size) - 1;
        (1..upper).flat_map(move |row| (1..upper).map(move |col| Cell::new(row, col)))
    }
}
