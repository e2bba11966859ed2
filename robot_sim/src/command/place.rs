use robot_board::{Direction, Position};

use super::{parse_coordinates, Context};
use crate::Rejection;

/// Places the robot on the position given by `args`, which are `X`, `Y` and the direction `F`.
///
/// The robot doesn't have to be placed already, an existing position is replaced.
pub(super) fn execute(context: &Context<'_>, args: &[String]) -> Result<Position, Rejection> {
    let position = parse_placement(args)?;

    if !context.board().is_position_valid(Some(&position)) {
        return Err(Rejection::OutsideBoard {
            max_width: context.board().max_width(),
            max_height: context.board().max_height(),
        });
    }

    Ok(position)
}

fn parse_placement(args: &[String]) -> Result<Position, Rejection> {
    let (x, y, direction) = match args {
        [x, y, direction] => (x, y, direction),
        _ => return Err(Rejection::PlaceArgumentCount),
    };

    let (x, y) = parse_coordinates(x, y).ok_or(Rejection::PlaceNotNumeric)?;
    let direction = direction
        .parse::<Direction>()
        .map_err(|_| Rejection::InvalidDirection)?;

    Ok(Position::new(x, y, direction))
}

#[cfg(test)]
mod tests {
    use crate::command::tests::run;
    use crate::command::Command;
    use crate::Rejection;
    use robot_board::{Board, Direction, Obstacle, Position};

    fn place(board: &Board, args: &[&str]) -> Result<Position, Rejection> {
        run(Command::Place, board, None, args).0
    }

    #[test]
    fn argument_count() {
        let board = Board::new(5, 5);
        for args in &[&[][..], &["1"], &["1", "2"], &["1", "2", "NORTH", "4"]] {
            assert_eq!(place(&board, args), Err(Rejection::PlaceArgumentCount));
        }
    }

    #[test]
    fn numeric_coordinates() {
        let board = Board::new(5, 5);
        for args in &[
            ["test", "2", "NORTH"],
            ["test", "test", "NORTH"],
            ["1", "test", "NORTH"],
            ["null", "1", "NORTH"],
        ] {
            assert_eq!(place(&board, args), Err(Rejection::PlaceNotNumeric));
        }
    }

    #[test]
    fn compass_direction() {
        let board = Board::new(5, 5);
        assert_eq!(
            place(&board, &["1", "1", "NORTHEAST"]),
            Err(Rejection::InvalidDirection)
        );
        assert_eq!(
            place(&board, &["1", "1", "south"]),
            Ok(Position::new(1, 1, Direction::South))
        );
    }

    #[test]
    fn outside_of_the_board() {
        let board = Board::new(5, 5);
        let expected = Err(Rejection::OutsideBoard {
            max_width: 5,
            max_height: 5,
        });
        for args in &[
            ["6", "5", "NORTH"],
            ["5", "6", "NORTH"],
            ["-1", "5", "NORTH"],
            ["2", "-1", "NORTH"],
        ] {
            assert_eq!(place(&board, args), expected);
        }
        assert_eq!(
            place(&board, &["5", "5", "WEST"]),
            Ok(Position::new(5, 5, Direction::West))
        );
    }

    #[test]
    fn on_an_obstacle() {
        let mut board = Board::new(4, 7);
        board.add_obstacles(vec![Obstacle::new(2, 2)]);
        assert_eq!(
            place(&board, &["2", "2", "NORTH"]),
            Err(Rejection::OutsideBoard {
                max_width: 4,
                max_height: 7,
            })
        );
    }

    #[test]
    fn replaces_a_placed_robot() {
        let board = Board::new(5, 5);
        let (result, _) = run(
            Command::Place,
            &board,
            Some(Position::new(2, 2, Direction::North)),
            &["4", "3", "EAST"],
        );
        assert_eq!(result, Ok(Position::new(4, 3, Direction::East)));
    }
}
