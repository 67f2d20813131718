use std::time::Duration;

use log::info;

use crate::clock::{SpeedCurve, Timestamp, due_to_advance};
use crate::config::{EngineConfig, MIN_INITIAL_LENGTH};
use crate::direction::{Direction, DirectionController};
use crate::error::EngineError;
use crate::food::FoodSpawner;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Heading of a freshly spawned snake.
pub const INITIAL_HEADING: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    BoardFull,
}

/// Outcome of one [`Engine::tick`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickResult {
    pub moved: bool,
    pub ate_food: bool,
    pub status: GameStatus,
    pub reason: Option<GameOverReason>,
}

/// Read-only view of the board for presentation layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Body cells from head to tail.
    pub snake_cells: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub speed_factor: f64,
    pub status: GameStatus,
    pub reason: Option<GameOverReason>,
    pub heading: Direction,
    pub grid_size: u16,
    pub tick_count: u64,
}

/// One game session. The value itself is the handle callers pass around;
/// there is no global state.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    speed: SpeedCurve,
    snake: Snake,
    controller: DirectionController,
    spawner: FoodSpawner,
    food: Cell,
    score: u32,
    interval: Duration,
    last_move_at: Option<Timestamp>,
    tick_count: u64,
    status: GameStatus,
    reason: Option<GameOverReason>,
}

impl Engine {
    /// Starts a game with entropy-seeded food placement.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_spawner(config, FoodSpawner::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible simulations.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_spawner(config, FoodSpawner::from_seed(seed))
    }

    fn with_spawner(config: EngineConfig, mut spawner: FoodSpawner) -> Result<Self, EngineError> {
        config.validate()?;

        let grid = Grid::new(config.grid_size);
        let speed = config.speed_curve();
        let (snake, food) = spawn_layout(grid, &config, &mut spawner);

        Ok(Self {
            config,
            grid,
            speed,
            snake,
            controller: DirectionController::new(INITIAL_HEADING),
            spawner,
            food,
            score: 0,
            interval: speed.interval_for_score(0),
            last_move_at: None,
            tick_count: 0,
            status: GameStatus::Running,
            reason: None,
        })
    }

    /// Discards the current game and starts a new one with the same
    /// configuration. The food RNG stream continues.
    pub fn reset(&mut self) {
        let (snake, food) = spawn_layout(self.grid, &self.config, &mut self.spawner);

        self.snake = snake;
        self.controller = DirectionController::new(INITIAL_HEADING);
        self.food = food;
        self.score = 0;
        self.interval = self.speed.interval_for_score(0);
        self.last_move_at = None;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.reason = None;
        info!("game reset on {0}x{0} grid", self.grid.size());
    }

    /// Buffers a heading change for the next tick. Returns whether it was
    /// accepted; reversals and requests after game over are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::Over {
            return false;
        }
        self.controller.set_pending(direction)
    }

    /// Advances the simulation by one cell if the tick interval has elapsed.
    pub fn tick(&mut self, now: Timestamp) -> TickResult {
        if self.status == GameStatus::Over
            || !due_to_advance(now, self.last_move_at, self.interval)
        {
            return self.result(false, false);
        }

        let direction = self.controller.commit();
        let candidate = self.snake.peek_move(direction);

        if !self.grid.is_interior(candidate) {
            self.finish(GameOverReason::WallCollision);
            return self.result(false, false);
        }

        let grew = candidate == self.food;
        if self.snake.would_collide(candidate, grew) {
            self.finish(GameOverReason::SelfCollision);
            return self.result(false, false);
        }

        self.snake.advance(candidate, grew);
        self.tick_count += 1;
        self.last_move_at = Some(now);

        if grew {
            self.score += self.config.points_per_food;
            self.interval = self.speed.interval_for_score(self.score);

            match self.spawner.spawn(self.grid, self.snake.occupied()) {
                Some(food) => self.food = food,
                None => self.finish(GameOverReason::BoardFull),
            }
        }

        self.result(true, grew)
    }

    /// Replaces the board layout; used to stage specific positions.
    ///
    /// The snake must sit in the interior with at least
    /// [`MIN_INITIAL_LENGTH`] cells, `heading` must not point back into its
    /// neck, and the food must be a free interior cell. Rejected once the
    /// game is over.
    pub fn set_layout(
        &mut self,
        snake: Snake,
        heading: Direction,
        food: Cell,
    ) -> Result<(), EngineError> {
        if self.status == GameStatus::Over {
            return Err(EngineError::GameOver);
        }
        if snake.len() < MIN_INITIAL_LENGTH {
            return Err(EngineError::InvalidLayout("snake is shorter than the spawn length"));
        }
        if snake.cells().nth(1) == Some(&snake.peek_move(heading)) {
            return Err(EngineError::InvalidLayout("heading points back into the body"));
        }
        if !snake.cells().all(|cell| self.grid.is_interior(*cell)) {
            return Err(EngineError::InvalidLayout("snake leaves the interior"));
        }
        if !self.grid.is_interior(food) || snake.occupies(food) {
            return Err(EngineError::InvalidLayout("food is not on a free interior cell"));
        }

        self.snake = snake;
        self.controller = DirectionController::new(heading);
        self.food = food;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake_cells: self.snake.cells().copied().collect(),
            food: self.food,
            score: self.score,
            speed_factor: self.speed.speed_factor(self.score),
            status: self.status,
            reason: self.reason,
            heading: self.controller.committed(),
            grid_size: self.grid.size(),
            tick_count: self.tick_count,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current delay between moves.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn reason(&self) -> Option<GameOverReason> {
        self.reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.status = GameStatus::Over;
        self.reason = Some(reason);
        info!(
            "game over ({reason:?}) score={} length={}",
            self.score,
            self.snake.len()
        );
    }

    fn result(&self, moved: bool, ate_food: bool) -> TickResult {
        TickResult {
            moved,
            ate_food,
            status: self.status,
            reason: self.reason,
        }
    }
}

/// Builds the spawn snake and its first food for a validated config.
fn spawn_layout(grid: Grid, config: &EngineConfig, spawner: &mut FoodSpawner) -> (Snake, Cell) {
    let snake = Snake::spawn(grid.center(), INITIAL_HEADING, config.initial_length);
    let food = spawner
        .spawn(grid, snake.occupied())
        .expect("validated config leaves a free interior cell for food");
    (snake, food)
}
