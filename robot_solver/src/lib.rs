mod depth_first;
pub mod util;

use getset::Getters;
use itertools::Itertools;
use robot_board::{Board, Field};
use std::fmt;

pub use depth_first::DepthFirst;

pub trait PathFinder {
    /// Find a path from `start` to `target` on `board` which only visits free fields.
    ///
    /// Returns `None` if the target can't be reached.
    fn find_path(&mut self, board: &Board, start: Field, target: Field) -> Option<Path>;
}

/// A path of adjacent fields from a starting field to a target field.
///
/// The first field is the start, the last field is the target. No field is visited twice.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Path {
    fields: Vec<Field>,
}

impl Path {
    /// Creates a new path over `fields`, starting with the first one.
    pub fn new(fields: Vec<Field>) -> Self {
        debug_assert!(!fields.is_empty());
        Self { fields }
    }

    /// Creates a new path which ends on the starting field.
    pub fn new_start_on_target(start: Field) -> Self {
        Self::new(vec![start])
    }

    /// Returns the field the path starts on.
    pub fn start(&self) -> Field {
        self.fields[0]
    }

    /// Returns the field the path ends on.
    pub fn target(&self) -> Field {
        self.fields[self.fields.len() - 1]
    }

    /// Returns the number of fields in the path, including start and target.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Checks if the path contains no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Writes the fields as space separated `x,y` pairs.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields.iter().join(" "))
    }
}
