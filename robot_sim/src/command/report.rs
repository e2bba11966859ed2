use robot_board::Position;

use super::{Command, Context};
use crate::{Rejection, ResponseKind};

/// Prints the current position and direction of the robot, which stays where it is.
pub(super) fn execute(context: &mut Context<'_>) -> Result<Position, Rejection> {
    let position = context.placed_position(Command::Report)?;

    context.send_message(
        &format!("Position of the robot: {}", position),
        ResponseKind::Message,
    );

    Ok(position)
}
