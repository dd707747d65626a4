use Direction::*;
use MoveResult::*;

/// A point on the playfield, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn stepped(self, direction: Direction, block: i32) -> Self {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx * block, self.y + dy * block)
    }

    /// True when the `block` x `block` squares at `self` and `other` intersect.
    pub fn overlaps(self, other: Position, block: i32) -> bool {
        self.x < other.x + block
            && self.x + block > other.x
            && self.y < other.y + block
            && self.y + block > other.y
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
            None => (0, 0),
        }
    }

    /// Whether a turn from `self` to `requested` is allowed. A turn must
    /// move along an axis the snake is currently at rest on.
    pub fn accepts(self, requested: Direction) -> bool {
        let (dx, dy) = self.delta();
        match requested {
            Left | Right => dx == 0,
            Up | Down => dy == 0,
            None => false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Crashed,
}

/// Body segments run from tail (index 0) to head (last). The body never
/// holds more than `length` segments.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Position>,
    length: usize,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake { body: vec![head], length: 1 }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Appends `new_head` and trims the tail back to `length`. Reports a
    /// crash when the new head lands on any other segment.
    pub fn move_to(&mut self, new_head: Position) -> MoveResult {
        self.body.push(new_head);

        while self.body.len() > self.length {
            self.body.remove(0);
        }

        if self.body[..self.body.len() - 1].contains(&new_head) {
            Crashed
        } else {
            Moved
        }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: i32 = 15;

    #[test]
    fn test_turns_must_change_axis() {
        assert!(!Right.accepts(Left));
        assert!(!Right.accepts(Right));
        assert!(Right.accepts(Up));
        assert!(Right.accepts(Down));

        assert!(!Up.accepts(Down));
        assert!(Up.accepts(Left));
        assert!(Up.accepts(Right));

        for dir in [Up, Down, Left, Right] {
            assert!(None.accepts(dir));
        }
    }

    #[test]
    fn test_overlap_is_aabb() {
        let head = Position::new(100, 100);
        assert!(head.overlaps(Position::new(105, 105), BLOCK));
        assert!(head.overlaps(Position::new(100, 100), BLOCK));
        assert!(!head.overlaps(Position::new(130, 130), BLOCK));
        // Touching edges do not intersect
        assert!(!head.overlaps(Position::new(115, 100), BLOCK));
    }

    #[test]
    fn test_stepped() {
        let pos = Position::new(30, 30);
        assert_eq!(pos.stepped(Up, BLOCK), Position::new(30, 15));
        assert_eq!(pos.stepped(Right, BLOCK), Position::new(45, 30));
        assert_eq!(pos.stepped(None, BLOCK), pos);
    }

    #[test]
    fn test_move_keeps_length() {
        let mut snake = Snake::new(Position::new(0, 0));
        snake.grow();
        snake.grow();

        let mut head = snake.head();
        for _ in 0..10 {
            head = head.stepped(Right, BLOCK);
            assert_eq!(snake.move_to(head), Moved);
            assert!(snake.body().len() <= snake.length());
        }

        assert_eq!(snake.body().len(), 3);
        assert_eq!(snake.head(), Position::new(150, 0));
        assert_eq!(snake.body()[0], Position::new(120, 0));
    }

    #[test]
    fn test_move_onto_body_crashes() {
        let mut snake = Snake::new(Position::new(0, 0));
        for _ in 0..4 {
            snake.grow();
        }

        let mut head = snake.head();
        for dir in [Right, Right, Down, Left] {
            head = head.stepped(dir, BLOCK);
            assert_eq!(snake.move_to(head), Moved);
        }

        // Up lands on (15, 0), still part of the body
        assert_eq!(snake.move_to(head.stepped(Up, BLOCK)), Crashed);
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        let mut snake = Snake::new(Position::new(0, 0));
        for _ in 0..3 {
            snake.grow();
        }

        let mut head = snake.head();
        for dir in [Right, Down, Left] {
            head = head.stepped(dir, BLOCK);
            snake.move_to(head);
        }

        // The tail at (0, 0) moves away on the same step the head arrives
        assert_eq!(snake.move_to(head.stepped(Up, BLOCK)), Moved);
    }
}
