use fxhash::FxHashSet;
use robot_board::{Board, Coordinate, Field};

/// Boards with more fields than this store visited fields in a hash set instead of a grid.
const MAX_GRID_FIELDS: usize = 1 << 24;

/// Stores which fields of a board have been visited during a single search.
///
/// Covers every field of the board including the outermost row and column. Fields outside the
/// board can't be marked.
#[derive(Debug, Clone)]
pub struct VisitedFields {
    max_width: Coordinate,
    max_height: Coordinate,
    store: Store,
    count: usize,
}

#[derive(Debug, Clone)]
enum Store {
    /// One flag per field, column by column.
    Grid(Vec<bool>),
    /// Only the visited fields, for boards too large for a grid.
    Sparse(FxHashSet<Field>),
}

impl VisitedFields {
    /// Creates a new store where no field of `board` has been visited.
    pub fn new(board: &Board) -> Self {
        let (max_width, max_height) = (board.max_width(), board.max_height());

        let fields = (max_width as usize + 1).checked_mul(max_height as usize + 1);
        let store = match fields {
            Some(fields) if fields <= MAX_GRID_FIELDS => Store::Grid(vec![false; fields]),
            _ => Store::Sparse(FxHashSet::default()),
        };

        Self {
            max_width,
            max_height,
            store,
            count: 0,
        }
    }

    fn contains(&self, field: Field) -> bool {
        (0..=self.max_width).contains(&field.x()) && (0..=self.max_height).contains(&field.y())
    }

    /// Marks `field` as visited.
    ///
    /// Returns `true` if the field had not been visited before, `false` if it had been or is not
    /// on the board.
    pub fn visit(&mut self, field: Field) -> bool {
        if !self.contains(field) {
            return false;
        }

        let rows = self.max_height as usize + 1;
        let fresh = match &mut self.store {
            Store::Grid(grid) => !std::mem::replace(&mut grid[index(field, rows)], true),
            Store::Sparse(set) => set.insert(field),
        };

        if fresh {
            self.count += 1;
        }
        fresh
    }

    /// Checks if `field` has been visited.
    pub fn is_visited(&self, field: Field) -> bool {
        if !self.contains(field) {
            return false;
        }

        match &self.store {
            Store::Grid(grid) => grid[index(field, self.max_height as usize + 1)],
            Store::Sparse(set) => set.contains(&field),
        }
    }

    /// Returns the number of visited fields.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Checks if the fields are stored in a hash set instead of a grid.
    pub fn is_sparse(&self) -> bool {
        matches!(self.store, Store::Sparse(_))
    }
}

/// Returns the index of `field` in a grid with `rows` fields per column.
fn index(field: Field, rows: usize) -> usize {
    field.x() as usize * rows + field.y() as usize
}
