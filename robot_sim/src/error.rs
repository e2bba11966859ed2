use robot_board::Coordinate;
use thiserror::Error;

/// A command that was refused because of the user's input or the current state of the robot.
///
/// Rejections never end the simulation and never change the robot. The message shown to the user
/// is the `Display` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Robot has not yet been placed. Use the PLACE command to place the robot before using the {command} command.")]
    NotPlaced { command: &'static str },

    #[error("PLACE command requires the placement position (X,Y) and the compass direction (F) as arguments. \nCorrect format: PLACE X,Y,F \n Example usage: PLACE 3,2,NORTH")]
    PlaceArgumentCount,

    #[error("PLACE command requires that the position (X, Y) are valid numbers. \nExample usage: PLACE 3,2,NORTH")]
    PlaceNotNumeric,

    #[error("PLACE command requires the direction (F) to be either NORTH, EAST, SOUTH, WEST. \nExample usage: PLACE 3,2,NORTH")]
    InvalidDirection,

    #[error("The robot cannot be placed outside the game board or on an obstacle. \nAvailable values for x: 0 - {max_width} \nAvailable values for y: 0 - {max_height}")]
    OutsideBoard {
        max_width: Coordinate,
        max_height: Coordinate,
    },

    #[error("MOVE command has been ignored because Robot would fall off the board or hit an obstacle. Please turn robot before reusing the MOVE command.")]
    MoveBlocked,

    #[error("PATH command requires the target position (X,Y) as arguments. \nCorrect format: PATH X,Y \n Example usage: PATH 3,2")]
    PathArgumentCount,

    #[error("PATH command requires that the target position (X, Y) are valid numbers. \nExample usage: PATH 3,2")]
    PathNotNumeric,

    #[error("The robot cannot be routed outside the game board or onto an obstacle. \nAvailable values for x: 0 - {max_width} \nAvailable values for y: 0 - {max_height}")]
    InvalidTarget {
        max_width: Coordinate,
        max_height: Coordinate,
    },

    #[error("No path available")]
    NoPath,

    #[error("The command '{command}' is not supported by the robot simulator.\nList of available commands: {available}")]
    UnsupportedCommand { command: String, available: String },
}

/// Errors that end the simulation.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("user input ended before the simulation was stopped")]
    InputClosed,

    #[error("unable to get user input: {0}")]
    Input(String),

    #[error("the stop token must not be blank")]
    BlankStopToken,

    #[error("the stop token '{token}' would shadow the {command} command")]
    StopTokenShadowsCommand { token: String, command: &'static str },
}
