use crate::{Board, Coordinate, Direction, Field, Position};
use draw_a_box::{find_character, Weight};

/// Width per field in the string in number of characters.
pub const FIELD_DRAW_WIDTH: usize = 5;

/// Height per field in the string in number of characters.
pub const FIELD_DRAW_HEIGHT: usize = 2;

/// Creates a string representation of a board with its obstacles and, if given, the robot.
///
/// North is up. Lines around the board and around obstacles are drawn heavy, blocked fields are
/// filled with `X` and the robot is drawn as an arrow pointing in the direction it is facing.
pub fn draw_board(board: &Board, robot: Option<&Position>) -> String {
    let canvas = create_board_string_vec(board, robot);
    let mut output = String::new();

    for row in &canvas {
        for &character in row {
            output.push_str(character);
        }
        output.push('\n');
    }

    output
}

/// Maps the drawing coordinates of a field, counted from the upper left corner, to the field on
/// the board.
///
/// Returns `None` for coordinates outside the board.
fn field_at(board: &Board, col: isize, row: isize) -> Option<Field> {
    let columns = board.max_width() as isize + 1;
    let rows = board.max_height() as isize + 1;
    if col < 0 || row < 0 || col >= columns || row >= rows {
        return None;
    }
    Some(Field::new(
        col as Coordinate,
        board.max_height() - row as Coordinate,
    ))
}

/// Weight of the line separating the fields `a` and `b`.
fn separator_weight(board: &Board, a: Option<Field>, b: Option<Field>) -> Weight {
    let blocked = |field: Option<Field>| field.map_or(true, |f| board.is_obstacle(f));
    match blocked(a) || blocked(b) {
        true => Weight::Heavy,
        false => Weight::Light,
    }
}

fn robot_character(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "^",
        Direction::East => ">",
        Direction::South => "v",
        Direction::West => "<",
    }
}

/// Creates the strings making up the board, indexed by `[row][column]`, used by `draw_board` to
/// create the actual visualization.
pub fn create_board_string_vec(board: &Board, robot: Option<&Position>) -> Vec<Vec<&'static str>> {
    let width = board.max_width() as usize + 1;
    let height = board.max_height() as usize + 1;
    let canvas_width = width * FIELD_DRAW_WIDTH + 1;
    let canvas_height = height * FIELD_DRAW_HEIGHT + 1;

    let mut canvas = vec![vec![" "; canvas_width]; canvas_height];
    let field = |col: usize, row: usize| field_at(board, col as isize - 1, row as isize - 1);

    // The closures below take grid indices shifted by one, so that index 0 lies outside the board.
    for grid_row in 0..=height {
        for grid_col in 0..=width {
            let (r, c) = (grid_row + 1, grid_col + 1);

            let up = match grid_row {
                0 => Weight::Empty,
                _ => separator_weight(board, field(c - 1, r - 1), field(c, r - 1)),
            };
            let down = match grid_row {
                i if i == height => Weight::Empty,
                _ => separator_weight(board, field(c - 1, r), field(c, r)),
            };
            let left = match grid_col {
                0 => Weight::Empty,
                _ => separator_weight(board, field(c - 1, r - 1), field(c - 1, r)),
            };
            let right = match grid_col {
                i if i == width => Weight::Empty,
                _ => separator_weight(board, field(c, r - 1), field(c, r)),
            };

            let canvas_row = grid_row * FIELD_DRAW_HEIGHT;
            let canvas_col = grid_col * FIELD_DRAW_WIDTH;
            canvas[canvas_row][canvas_col] = find_character(up, right, down, left);

            // Set horizontal connections
            if grid_col < width {
                let weight = right;
                for col in (canvas_col + 1)..(canvas_col + FIELD_DRAW_WIDTH) {
                    canvas[canvas_row][col] =
                        find_character(Weight::Empty, weight, Weight::Empty, weight);
                }
            }

            // Set vertical connections
            if grid_row < height {
                let weight = down;
                for row in (canvas_row + 1)..(canvas_row + FIELD_DRAW_HEIGHT) {
                    canvas[row][canvas_col] =
                        find_character(weight, Weight::Empty, weight, Weight::Empty);
                }
            }
        }
    }

    // Fill the fields
    for row in 0..height {
        for col in 0..width {
            let content = match field(col + 1, row + 1) {
                Some(f) if board.is_obstacle(f) => Some("X"),
                Some(f) => robot
                    .filter(|pos| pos.field() == f)
                    .map(|pos| robot_character(pos.direction())),
                None => None,
            };

            if let Some(content) = content {
                let canvas_row = row * FIELD_DRAW_HEIGHT + 1;
                let canvas_col = col * FIELD_DRAW_WIDTH;
                canvas[canvas_row][canvas_col + 2] = content;
                canvas[canvas_row][canvas_col + 3] = content;
            }
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::{create_board_string_vec, draw_board, FIELD_DRAW_HEIGHT, FIELD_DRAW_WIDTH};
    use crate::{Board, Direction, Obstacle, Position};

    #[test]
    fn canvas_size() {
        let board = Board::new(5, 2);
        let canvas = create_board_string_vec(&board, None);
        assert_eq!(canvas.len(), 3 * FIELD_DRAW_HEIGHT + 1);
        assert!(canvas.iter().all(|row| row.len() == 6 * FIELD_DRAW_WIDTH + 1));
    }

    #[test]
    fn obstacles_and_robot_are_drawn() {
        let mut board = Board::new(2, 2);
        board.add_obstacles(vec![Obstacle::new(2, 2)]);
        let robot = Position::new(0, 0, Direction::East);
        let canvas = create_board_string_vec(&board, Some(&robot));

        // the upper right field is blocked, the robot stands in the lower left field
        assert_eq!(canvas[1][2 * FIELD_DRAW_WIDTH + 2], "X");
        assert_eq!(canvas[2 * FIELD_DRAW_HEIGHT + 1][2], ">");
        assert_eq!(canvas[1][2], " ");

        let drawing = draw_board(&board, Some(&robot));
        assert_eq!(drawing.lines().count(), 3 * FIELD_DRAW_HEIGHT + 1);
        assert_eq!(drawing.matches('X').count(), 2);
    }
}
