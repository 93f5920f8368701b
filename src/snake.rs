use crate::config::UNIT_SIZE;
use crate::{Coords, Px};

use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The velocity vector for this direction: exactly one component
    /// non-zero, with magnitude `UNIT_SIZE`. The y axis grows downwards.
    pub fn velocity(self) -> Coords {
        match self {
            Up => (0, -UNIT_SIZE),
            Down => (0, UNIT_SIZE),
            Left => (-UNIT_SIZE, 0),
            Right => (UNIT_SIZE, 0),
        }
    }
}

/// The snake body as an ordered segment list, head first.
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Coords, length: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.velocity();
        let body = (0..length)
            .map(|i| (head.0 - dx * i as Px, head.1 - dy * i as Px))
            .collect();
        Snake { body, direction }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turn the snake, ignoring a request for the exact opposite of the
    /// current direction. Applied per input event, so two quick
    /// perpendicular turns between ticks can still double back.
    pub fn set_direction(&mut self, new_direction: Direction) {
        match (new_direction, self.direction) {
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right) => {}
            _ => self.direction = new_direction,
        };
    }

    /// Prepend the next head position and return it. Tail handling is the
    /// caller's call: `drop_tail` unless the snake grew this step.
    pub fn advance(&mut self) -> Coords {
        let (dx, dy) = self.direction.velocity();
        let head = self.head();
        let new_head = (head.0 + dx, head.1 + dy);
        self.body.insert(0, new_head);
        new_head
    }

    pub fn drop_tail(&mut self) {
        self.body.pop();
    }

    /// True when the head occupies the same cell as any other segment.
    pub fn hits_self(&self) -> bool {
        self.body[1..].contains(&self.body[0])
    }
}
