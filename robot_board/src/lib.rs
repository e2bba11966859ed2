#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

//! Basic components to simulate a toy robot on a table top.
//!
//! A single robot moves on a rectangular [`Board`](Board) whose fields are addressed by `x`
//! (growing to the east) and `y` (growing to the north). The bounds of a board are inclusive, a
//! board created with `Board::new(5, 5)` has the valid coordinates `0..=5` on both axes. Fields can
//! be blocked by [`Obstacle`](Obstacle)s which are set up once before the simulation starts.
//!
//! The robot itself only knows its current [`Position`](Position), which is a field together with
//! the [`Direction`](Direction) the robot is facing. A robot that has never been placed has no
//! position at all. Checking whether a position is allowed is the job of the board, the robot
//! accepts every position it is given.
//!
//! The [`generator`](generator) module provides a seeded generator for random obstacle layouts and
//! [`draw_board`](draw_board) renders a board with its obstacles and the robot.

mod draw;
pub mod generator;
mod positions;

use fxhash::FxHashSet;
use std::fmt;
use std::str::FromStr;

pub use crate::draw::draw_board;
pub use crate::positions::{Coordinate, Field, Position};

/// All `Direction`s in clockwise order starting with `North`.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// The compass directions a robot can face.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Error returned when parsing a string which is not the name of a compass direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

/// A single blocked field on a board.
///
/// Unlike a [`Position`](Position) an obstacle has no direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Obstacle {
    x: Coordinate,
    y: Coordinate,
}

/// A rectangular board with inclusive bounds and a set of blocked fields.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    max_width: Coordinate,
    max_height: Coordinate,
    obstacles: FxHashSet<Field>,
}

/// The robot moving on the board.
///
/// Only stores the current position, any validation happens before a new position is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Robot {
    position: Option<Position>,
}

impl Direction {
    /// Returns the direction after a 90 degree turn counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Returns the direction after a 90 degree turn clockwise.
    pub fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Returns the change in `(x, y)` of a single step in this direction.
    pub fn offset(self) -> (Coordinate, Coordinate) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Returns the upper-case compass name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses a compass name ignoring its case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTIONS
            .iter()
            .copied()
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not a compass direction", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl Obstacle {
    /// Creates a new obstacle on the field (`x`, `y`).
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate of the obstacle.
    pub fn x(&self) -> Coordinate {
        self.x
    }

    /// Returns the y coordinate of the obstacle.
    pub fn y(&self) -> Coordinate {
        self.y
    }

    /// Returns the field blocked by the obstacle.
    pub fn field(&self) -> Field {
        Field::new(self.x, self.y)
    }
}

impl From<(Coordinate, Coordinate)> for Obstacle {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Board impl containing code to create or change a board.
impl Board {
    /// Creates a new board without obstacles.
    ///
    /// Both bounds are inclusive, the board has `(max_width + 1) * (max_height + 1)` fields.
    ///
    /// # Panics
    /// Panics if one of the bounds is negative.
    pub fn new(max_width: Coordinate, max_height: Coordinate) -> Self {
        if max_width < 0 || max_height < 0 {
            panic!("Tried to create a board with negative bounds.")
        }

        Self {
            max_width,
            max_height,
            obstacles: FxHashSet::default(),
        }
    }

    /// Blocks the fields of all `obstacles` which are on the board.
    ///
    /// Obstacles outside the bounds of the board are dropped and returned, they never affect the
    /// validity of a position.
    pub fn add_obstacles<I>(&mut self, obstacles: I) -> Vec<Obstacle>
    where
        I: IntoIterator<Item = Obstacle>,
    {
        let mut dropped = Vec::new();
        for obstacle in obstacles {
            if self.contains(obstacle.field()) {
                self.obstacles.insert(obstacle.field());
            } else {
                tracing::warn!(%obstacle, "dropping obstacle outside of the board");
                dropped.push(obstacle);
            }
        }
        dropped
    }
}

/// Board impl containing code to interact with a board.
impl Board {
    /// Returns the largest valid x coordinate.
    pub fn max_width(&self) -> Coordinate {
        self.max_width
    }

    /// Returns the largest valid y coordinate.
    pub fn max_height(&self) -> Coordinate {
        self.max_height
    }

    /// Returns the number of blocked fields.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Checks if `field` lies within the bounds of the board, ignoring obstacles.
    #[inline]
    pub fn contains(&self, field: Field) -> bool {
        (0..=self.max_width).contains(&field.x()) && (0..=self.max_height).contains(&field.y())
    }

    /// Checks if `field` is blocked by an obstacle.
    #[inline]
    pub fn is_obstacle(&self, field: Field) -> bool {
        self.obstacles.contains(&field)
    }

    /// Checks if the robot could stand on `field`, i.e. it is on the board and not blocked.
    #[inline]
    pub fn is_field_free(&self, field: Field) -> bool {
        self.contains(field) && !self.is_obstacle(field)
    }

    /// Checks if `position` is a valid position for the robot.
    ///
    /// A missing position is never valid.
    pub fn is_position_valid(&self, position: Option<&Position>) -> bool {
        match position {
            Some(pos) => self.is_field_free(pos.field()),
            None => false,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", draw_board(self, None))
    }
}

impl Robot {
    /// Creates a robot which has not been placed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current position or `None` if the robot has not been placed.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Overwrites the position of the robot.
    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Checks if the robot has been placed on the board.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}
