use crate::config::GameConfig;
use crate::snake::{Direction, MoveResult, Position, Snake};

use log::{debug, info};
use rand::{rngs::StdRng, Rng};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickResult {
    /// No direction chosen yet, or the session already ended
    Idle,
    Moved { ate_food: bool },
    Crashed(Collision),
}

/// One round of play, from the first tick until a terminal collision.
pub struct GameSession {
    config: GameConfig,
    snake: Snake,
    direction: Direction,
    pending: Direction,
    food: Position,
    terminated: bool,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let food = spawn_food(&config, &mut rng);
        let snake = Snake::new(config.centre());
        info!("New session, head at {:?}, food at {:?}", snake.head(), food);

        GameSession {
            config,
            snake,
            direction: Direction::None,
            pending: Direction::None,
            food,
            terminated: false,
            rng,
        }
    }

    /// Buffers a turn for the next tick. Turns are checked against the
    /// latest accepted direction, so a reversal is never buffered.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if self.terminated || !self.pending.accepts(requested) {
            return false;
        }

        self.pending = requested;
        true
    }

    pub fn tick(&mut self) -> TickResult {
        if self.terminated {
            return TickResult::Idle;
        }

        self.direction = self.pending;
        if self.direction == Direction::None {
            return TickResult::Idle;
        }

        let block = self.config.block;
        let new_head = self.snake.head().stepped(self.direction, block);

        if !self.config.is_in_bounds(new_head) {
            return self.end(Collision::Wall);
        }

        if self.snake.move_to(new_head) == MoveResult::Crashed {
            return self.end(Collision::SelfCollision);
        }

        let ate_food = new_head.overlaps(self.food, block);
        if ate_food {
            self.snake.grow();
            // May land on the body; there is no retry
            self.food = spawn_food(&self.config, &mut self.rng);
            debug!("Food eaten, score {}, next food at {:?}", self.score(), self.food);
        }

        TickResult::Moved { ate_food }
    }

    pub fn score(&self) -> u32 {
        (self.snake.length() - 1) as u32
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Position) {
        self.food = food;
    }

    fn end(&mut self, collision: Collision) -> TickResult {
        self.terminated = true;
        info!("Session over ({:?}), score {}", collision, self.score());
        TickResult::Crashed(collision)
    }
}

/// Uniform over the playfield, rounded to the nearest grid line.
fn spawn_food(config: &GameConfig, rng: &mut StdRng) -> Position {
    let block = config.block;
    let mut axis = |extent: i32| {
        let raw = rng.gen_range(0..(extent - block).max(1));
        (raw as f64 / block as f64).round() as i32 * block
    };

    let x = axis(config.width);
    let y = axis(config.height);
    Position::new(x, y)
}
