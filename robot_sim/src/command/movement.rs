use robot_board::Position;

use super::{Command, Context};
use crate::Rejection;

/// Moves the robot one field into the direction it is facing.
///
/// The move is rejected if the robot would leave the board or run into an obstacle.
pub(super) fn step_forward(context: &Context<'_>) -> Result<Position, Rejection> {
    context
        .placed_position(Command::Move)?
        .step_forward()
        .filter(|position| context.board().is_position_valid(Some(position)))
        .ok_or(Rejection::MoveBlocked)
}

/// Turns the robot 90 degrees left without moving it.
pub(super) fn turn_left(context: &Context<'_>) -> Result<Position, Rejection> {
    Ok(context.placed_position(Command::Left)?.turn_left())
}

/// Turns the robot 90 degrees right without moving it.
pub(super) fn turn_right(context: &Context<'_>) -> Result<Position, Rejection> {
    Ok(context.placed_position(Command::Right)?.turn_right())
}
