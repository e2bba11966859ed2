use std::fmt;

use crate::Direction;

/// The type a coordinate on the board is encoded as.
///
/// Signed so that positions left of or below the board can be represented and rejected.
pub type Coordinate = i32;

/// A field on the board without any direction.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Field {
    x: Coordinate,
    y: Coordinate,
}

/// The position of the robot, a field together with the direction the robot is facing.
///
/// Positions are never changed in place, every move creates a new position.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub struct Position {
    field: Field,
    direction: Direction,
}

impl Field {
    /// Creates a new field.
    ///
    /// The field is not checked against any board.
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Field { x, y }
    }

    /// Returns the column of the field.
    #[inline(always)]
    pub fn x(&self) -> Coordinate {
        self.x
    }

    /// Returns the row of the field.
    #[inline(always)]
    pub fn y(&self) -> Coordinate {
        self.y
    }

    /// Returns the neighbouring field one step in `direction`.
    ///
    /// Returns `None` if the neighbour can't be represented by a `Coordinate`.
    pub fn to_direction(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Field::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<Field> for (Coordinate, Coordinate) {
    fn from(field: Field) -> Self {
        (field.x, field.y)
    }
}

impl From<(Coordinate, Coordinate)> for Field {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl Position {
    /// Creates a new position on (`x`, `y`) facing `direction`.
    pub fn new(x: Coordinate, y: Coordinate, direction: Direction) -> Self {
        Self::on_field(Field::new(x, y), direction)
    }

    /// Creates a new position on `field` facing `direction`.
    pub fn on_field(field: Field, direction: Direction) -> Self {
        Position { field, direction }
    }

    /// Returns the column of the position.
    #[inline(always)]
    pub fn x(&self) -> Coordinate {
        self.field.x
    }

    /// Returns the row of the position.
    #[inline(always)]
    pub fn y(&self) -> Coordinate {
        self.field.y
    }

    /// Returns the field the position is on.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Returns the direction the robot is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the position one step ahead in the current direction.
    ///
    /// Returns `None` if the step leaves the range of a `Coordinate`.
    pub fn step_forward(self) -> Option<Self> {
        let field = self.field.to_direction(self.direction)?;
        Some(Self::on_field(field, self.direction))
    }

    /// Returns the position on the same field turned 90 degrees counter-clockwise.
    pub fn turn_left(self) -> Self {
        Self::on_field(self.field, self.direction.left())
    }

    /// Returns the position on the same field turned 90 degrees clockwise.
    pub fn turn_right(self) -> Self {
        Self::on_field(self.field, self.direction.right())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.x(), self.y(), self.direction)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.x(), self.y(), self.direction)
    }
}
