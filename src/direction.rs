/// Canonical movement directions on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row/column step for one move in this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Buffers heading requests between ticks.
///
/// Requests are validated against the *committed* direction, the one the
/// last completed move used. Chaining two quick turns inside one tick window
/// therefore cannot smuggle a reversal through an unapplied intermediate
/// request: the second request replaces the first, and is checked against
/// the same committed heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionController {
    committed: Direction,
    pending: Option<Direction>,
}

impl DirectionController {
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: None,
        }
    }

    /// Stores `direction` for the next tick unless it reverses the committed
    /// heading. Returns whether the request was accepted.
    pub fn set_pending(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.committed, direction) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Resolves the direction for the upcoming tick and marks it committed.
    pub fn commit(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            self.committed = next;
        }
        self.committed
    }

    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }

    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}
