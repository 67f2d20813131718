use std::collections::{HashSet, VecDeque};

use crate::direction::Direction;
use crate::error::EngineError;
use crate::grid::Cell;

/// Snake body: ordered cells (front is head) plus a membership set.
///
/// The set mirrors the deque exactly; every mutation goes through
/// [`Snake::advance`], which updates both.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    /// Creates a straight snake with its head at `head`, body trailing
    /// behind `heading`.
    #[must_use]
    pub fn spawn(head: Cell, heading: Direction, length: usize) -> Self {
        let behind = heading.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.offset(behind);
        }

        let occupied = body.iter().copied().collect();
        Self { body, occupied }
    }

    /// Creates a snake from explicit body cells (front is head).
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, EngineError> {
        if cells.is_empty() {
            return Err(EngineError::InvalidLayout("snake body is empty"));
        }

        let occupied: HashSet<Cell> = cells.iter().copied().collect();
        if occupied.len() != cells.len() {
            return Err(EngineError::InvalidLayout("snake body overlaps itself"));
        }

        Ok(Self {
            body: VecDeque::from(cells),
            occupied,
        })
    }

    /// Returns the head position after one step in `direction`.
    #[must_use]
    pub fn peek_move(&self, direction: Direction) -> Cell {
        self.head().offset(direction)
    }

    /// Pushes `new_head`; the tail is kept only when the snake `grew`.
    ///
    /// Legality of `new_head` is the caller's responsibility.
    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        if !grew {
            if let Some(tail) = self.body.pop_back() {
                self.occupied.remove(&tail);
            }
        }

        self.body.push_front(new_head);
        self.occupied.insert(new_head);
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Returns true if moving into `cell` would hit the body.
    ///
    /// The current tail does not count when the snake is not growing, since
    /// it vacates that cell during the same move.
    #[must_use]
    pub fn would_collide(&self, cell: Cell, grows: bool) -> bool {
        self.occupies(cell) && (grows || cell != self.tail())
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Set of all occupied cells.
    #[must_use]
    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }
}
