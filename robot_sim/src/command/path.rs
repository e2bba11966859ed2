use robot_board::{Field, Position};
use robot_solver::{DepthFirst, PathFinder};

use super::{parse_coordinates, Command, Context};
use crate::{Rejection, ResponseKind};

/// Moves the robot to the target field given by `args` on a route around all obstacles.
///
/// The route is printed as the list of visited fields. The robot keeps its direction.
pub(super) fn execute(context: &mut Context<'_>, args: &[String]) -> Result<Position, Rejection> {
    let position = context.placed_position(Command::Path)?;
    let target = parse_target(args)?;

    if !context.board().is_field_free(target) {
        return Err(Rejection::InvalidTarget {
            max_width: context.board().max_width(),
            max_height: context.board().max_height(),
        });
    }

    let path = DepthFirst::new()
        .find_path(context.board(), position.field(), target)
        .ok_or(Rejection::NoPath)?;

    context.send_message(&path.to_string(), ResponseKind::Message);

    Ok(Position::on_field(target, position.direction()))
}

fn parse_target(args: &[String]) -> Result<Field, Rejection> {
    let (x, y) = match args {
        [x, y] => (x, y),
        _ => return Err(Rejection::PathArgumentCount),
    };

    parse_coordinates(x, y)
        .map(Field::from)
        .ok_or(Rejection::PathNotNumeric)
}
