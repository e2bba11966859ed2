//! The commands the robot understands.
//!
//! Every command computes the next position of the robot from the current state without changing
//! anything. The simulator stores the returned position only if the command succeeded, so a
//! rejected command leaves the robot where it was.

mod movement;
mod path;
mod place;
mod report;

use robot_board::{Board, Coordinate, Position, Robot};
use std::fmt;

use crate::{Rejection, ResponseKind, UserCommunication};

/// All commands in the order they are registered in the simulator.
pub const COMMANDS: [Command; 6] = [
    Command::Place,
    Command::Report,
    Command::Move,
    Command::Right,
    Command::Left,
    Command::Path,
];

/// The commands of the simulator, identified by their trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `PLACE X,Y,F` puts the robot on a field facing a direction.
    Place,
    /// `REPORT` prints the current position of the robot.
    Report,
    /// `MOVE` moves the robot one field forward.
    Move,
    /// `RIGHT` turns the robot 90 degrees clockwise.
    Right,
    /// `LEFT` turns the robot 90 degrees counter-clockwise.
    Left,
    /// `PATH X,Y` moves the robot to a target field around obstacles and prints the route.
    Path,
}

/// Read access to the simulation for a command, plus a way to talk to the user.
pub struct Context<'a> {
    board: &'a Board,
    robot: &'a Robot,
    communication: &'a mut dyn UserCommunication,
}

impl Command {
    /// Returns the lower case word which triggers the command.
    pub fn trigger(self) -> &'static str {
        match self {
            Command::Place => "place",
            Command::Report => "report",
            Command::Move => "move",
            Command::Right => "right",
            Command::Left => "left",
            Command::Path => "path",
        }
    }

    /// Returns the upper case name of the command as shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            Command::Place => "PLACE",
            Command::Report => "REPORT",
            Command::Move => "MOVE",
            Command::Right => "RIGHT",
            Command::Left => "LEFT",
            Command::Path => "PATH",
        }
    }

    /// Runs the command with the comma separated `args` the user passed.
    ///
    /// Returns the new position of the robot.
    pub fn execute(
        self,
        context: &mut Context<'_>,
        args: &[String],
    ) -> Result<Position, Rejection> {
        match self {
            Command::Place => place::execute(context, args),
            Command::Report => report::execute(context),
            Command::Move => movement::step_forward(context),
            Command::Right => movement::turn_right(context),
            Command::Left => movement::turn_left(context),
            Command::Path => path::execute(context, args),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl<'a> Context<'a> {
    /// Creates a new context for a single command.
    pub fn new(
        board: &'a Board,
        robot: &'a Robot,
        communication: &'a mut dyn UserCommunication,
    ) -> Self {
        Self {
            board,
            robot,
            communication,
        }
    }

    /// Returns the board the robot is on.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Returns the robot.
    pub fn robot(&self) -> &Robot {
        self.robot
    }

    /// Sends `message` to the user.
    pub fn send_message(&mut self, message: &str, kind: ResponseKind) {
        self.communication.send_message(message, kind)
    }

    /// Returns the position of the robot or rejects `command` if the robot has not been placed.
    pub fn placed_position(&self, command: Command) -> Result<Position, Rejection> {
        self.robot
            .position()
            .copied()
            .ok_or(Rejection::NotPlaced {
                command: command.name(),
            })
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Context")
            .field("board", &self.board)
            .field("robot", &self.robot)
            .finish()
    }
}

/// Parses a pair of integer coordinates.
fn parse_coordinates(x: &str, y: &str) -> Option<(Coordinate, Coordinate)> {
    Some((x.parse().ok()?, y.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::{parse_coordinates, Command, Context, COMMANDS};
    use crate::{Rejection, ResponseKind, ScriptedCommunication};
    use robot_board::{Board, Position, Robot};
    use std::collections::HashSet;

    /// Runs `command` on a fresh 5x5 board with the robot on `position`.
    ///
    /// Returns the result and all messages sent to the user.
    pub(crate) fn run(
        command: Command,
        board: &Board,
        position: Option<Position>,
        args: &[&str],
    ) -> (Result<Position, Rejection>, Vec<(String, ResponseKind)>) {
        let mut robot = Robot::new();
        if let Some(position) = position {
            robot.set_position(position);
        }
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let mut communication = ScriptedCommunication::default();
        let result = {
            let mut context = Context::new(board, &robot, &mut communication);
            command.execute(&mut context, &args)
        };
        (result, communication.responses().to_vec())
    }

    #[test]
    fn triggers_are_unique_and_lower_case() {
        let triggers: HashSet<_> = COMMANDS.iter().map(|c| c.trigger()).collect();
        assert_eq!(triggers.len(), COMMANDS.len());
        for command in COMMANDS.iter() {
            assert_eq!(command.trigger().to_uppercase(), command.name());
        }
    }

    #[test]
    fn everything_but_place_needs_a_placed_robot() {
        let board = Board::new(5, 5);
        for &command in COMMANDS.iter().filter(|&&c| c != Command::Place) {
            let args: &[&str] = match command {
                Command::Path => &["1", "1"],
                _ => &[],
            };
            let (result, responses) = run(command, &board, None, args);
            assert_eq!(
                result,
                Err(Rejection::NotPlaced {
                    command: command.name()
                })
            );
            assert!(responses.is_empty());
        }
    }

    #[test]
    fn coordinates() {
        assert_eq!(parse_coordinates("3", "-2"), Some((3, -2)));
        assert_eq!(parse_coordinates("test", "2"), None);
        assert_eq!(parse_coordinates("1", "null"), None);
        assert_eq!(parse_coordinates("1.5", "2"), None);
    }
}
