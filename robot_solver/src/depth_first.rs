use robot_board::{Board, Direction, Field, DIRECTIONS};

use crate::util::VisitedFields;
use crate::{Path, PathFinder};

/// Finds a path by trying the neighbours of a field in a fixed order and backtracking as soon as
/// a field has no unvisited free neighbours left.
///
/// Neighbours are tried in the order north, east, south, west. The found path is a simple path,
/// but usually not the shortest one. If no path is found, the target can't be reached at all.
///
/// A step to the north or east is only taken while the new coordinate stays below the maximum
/// of the board, so the outermost row and column are only used when the search starts there.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    /// Number of fields visited by the last search.
    explored_fields: usize,
}

/// A field on the current search path and the index of the next direction to try from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    field: Field,
    next_direction: usize,
}

impl PathFinder for DepthFirst {
    fn find_path(&mut self, board: &Board, start: Field, target: Field) -> Option<Path> {
        self.explored_fields = 0;

        if !board.is_field_free(start) || !board.is_field_free(target) {
            return None;
        }

        // Check if the robot is already on the target
        if start == target {
            return Some(Path::new_start_on_target(start));
        }

        let path = self.start(board, start, target);
        tracing::debug!(
            %start,
            %target,
            explored = self.explored_fields,
            found = path.is_some(),
            "depth first search finished"
        );
        path
    }
}

impl DepthFirst {
    /// Create a new path finder which uses a depth first search.
    pub fn new() -> Self {
        Self { explored_fields: 0 }
    }

    /// Returns the number of fields visited by the last search.
    pub fn explored_fields(&self) -> usize {
        self.explored_fields
    }

    fn start(&mut self, board: &Board, start: Field, target: Field) -> Option<Path> {
        // A fresh store for every search, nothing is shared between searches.
        let mut visited = VisitedFields::new(board);
        visited.visit(start);

        let mut stack = Vec::with_capacity(64);
        stack.push(Frame {
            field: start,
            next_direction: 0,
        });

        while let Some(frame) = stack.last_mut() {
            // All neighbours have been tried, backtrack.
            if frame.next_direction == DIRECTIONS.len() {
                stack.pop();
                continue;
            }

            let direction = DIRECTIONS[frame.next_direction];
            frame.next_direction += 1;

            let next = match Self::neighbour(board, frame.field, direction) {
                Some(next) => next,
                None => continue,
            };

            if next == target {
                let mut fields: Vec<Field> = stack.iter().map(|frame| frame.field).collect();
                fields.push(next);
                self.explored_fields = visited.count();
                return Some(Path::new(fields));
            }

            if board.is_field_free(next) && visited.visit(next) {
                stack.push(Frame {
                    field: next,
                    next_direction: 0,
                });
            }
        }

        self.explored_fields = visited.count();
        None
    }

    /// Returns the neighbour of `field` in `direction` if the search may step there.
    fn neighbour(board: &Board, field: Field, direction: Direction) -> Option<Field> {
        // Same as `y + 1 < max_height`, without overflowing on the largest boards.
        let allowed = match direction {
            Direction::North => field.y() < board.max_height() - 1,
            Direction::East => field.x() < board.max_width() - 1,
            Direction::South => field.y() > 0,
            Direction::West => field.x() > 0,
        };

        match allowed {
            true => field.to_direction(direction),
            false => None,
        }
    }
}

impl Default for DepthFirst {
    fn default() -> Self {
        Self::new()
    }
}
