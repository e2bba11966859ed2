use indexmap::IndexMap;
use itertools::Itertools;
use robot_board::{Board, Coordinate, Obstacle, Robot};

use crate::command::{Command, Context, COMMANDS};
use crate::{Rejection, ResponseKind, SimError, UserCommunication};

/// Settings of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// The largest valid x coordinate of the board.
    pub max_width: Coordinate,
    /// The largest valid y coordinate of the board.
    pub max_height: Coordinate,
    /// The input which ends the simulation, compared ignoring case.
    pub stop_token: String,
    /// The prompt shown when asking for the next command.
    pub prompt: String,
}

/// Whether the simulator still accepts commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    Running,
    Stopped,
}

/// Runs the simulation of a robot on a board, one command per line of user input.
#[derive(Debug)]
pub struct Simulator<C> {
    board: Board,
    robot: Robot,
    /// The registered commands in registration order, keyed by their trigger.
    commands: IndexMap<&'static str, Command>,
    config: SimulatorConfig,
    communication: C,
    state: SimulatorState,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_width: 5,
            max_height: 5,
            stop_token: "stop".to_string(),
            prompt: "Enter command".to_string(),
        }
    }
}

impl<C: UserCommunication> Simulator<C> {
    /// Creates a new simulator with an empty board and a robot that has not been placed.
    ///
    /// Fails if the stop token is blank or matches the trigger of a command.
    ///
    /// # Panics
    /// Panics if one of the board bounds in `config` is negative.
    pub fn new(mut config: SimulatorConfig, communication: C) -> Result<Self, SimError> {
        config.stop_token = config.stop_token.trim().to_string();
        if config.stop_token.is_empty() {
            return Err(SimError::BlankStopToken);
        }

        let commands: IndexMap<_, _> = COMMANDS.iter().map(|&c| (c.trigger(), c)).collect();
        debug_assert_eq!(commands.len(), COMMANDS.len(), "triggers must be unique");

        if let Some(command) = commands
            .values()
            .find(|c| c.trigger().eq_ignore_ascii_case(&config.stop_token))
        {
            return Err(SimError::StopTokenShadowsCommand {
                token: config.stop_token,
                command: command.name(),
            });
        }

        Ok(Self {
            board: Board::new(config.max_width, config.max_height),
            robot: Robot::new(),
            commands,
            config,
            communication,
            state: SimulatorState::Running,
        })
    }

    /// Blocks fields on the board before the simulation is run.
    ///
    /// Obstacles outside the board are ignored, the user is notified about each of them. Returns
    /// the ignored obstacles.
    pub fn add_obstacles<I>(&mut self, obstacles: I) -> Vec<Obstacle>
    where
        I: IntoIterator<Item = Obstacle>,
    {
        let dropped = self.board.add_obstacles(obstacles);
        for obstacle in &dropped {
            self.communication.send_message(
                &format!(
                    "Obstacle {} is outside of the game board and has been ignored.",
                    obstacle
                ),
                ResponseKind::Info,
            );
        }
        dropped
    }

    /// Runs the simulation until the stop token is entered.
    ///
    /// Rejected commands are reported to the user and the simulation continues. Any other error
    /// ends the simulation and is returned.
    pub fn run(&mut self) -> Result<(), SimError> {
        tracing::debug!(
            max_width = self.board.max_width(),
            max_height = self.board.max_height(),
            obstacles = self.board.obstacle_count(),
            "starting simulation"
        );

        while self.state == SimulatorState::Running {
            let input = self.communication.read_input(&self.config.prompt)?;

            if let Err(rejection) = self.process_line(&input) {
                tracing::debug!(%rejection, "command rejected");
                self.communication
                    .send_message(&rejection.to_string(), ResponseKind::Info);
            }
        }

        tracing::debug!("simulation stopped");
        Ok(())
    }

    /// Processes a single line of input.
    ///
    /// Stops the simulation if the line is the stop token, otherwise executes the command and
    /// moves the robot to its new position. Does nothing once the simulation has been stopped.
    pub fn process_line(&mut self, input: &str) -> Result<(), Rejection> {
        if self.state == SimulatorState::Stopped {
            return Ok(());
        }

        if input.trim().eq_ignore_ascii_case(&self.config.stop_token) {
            self.state = SimulatorState::Stopped;
            return Ok(());
        }

        let (command, args) = self.parse_input(input)?;
        tracing::debug!(%command, ?args, "executing command");

        let position = {
            let mut context = Context::new(&self.board, &self.robot, &mut self.communication);
            command.execute(&mut context, &args)?
        };

        // Checks have been done by the command, so the position is valid.
        if self.robot.position() != Some(&position) {
            tracing::info!(%position, "robot moved");
        }
        self.robot.set_position(position);

        Ok(())
    }

    /// Splits the input into the command to execute and its list of arguments.
    ///
    /// The first word selects the command, ignoring case. The remaining words are joined without
    /// any separator and split at commas, so spaces anywhere in the arguments are ignored. Empty
    /// arguments are removed.
    pub fn parse_input(&self, input: &str) -> Result<(Command, Vec<String>), Rejection> {
        let mut words = input.split_whitespace();
        let trigger = words.next().unwrap_or("");

        let command = self
            .commands
            .get(trigger.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Rejection::UnsupportedCommand {
                command: trigger.to_string(),
                available: self.commands.values().map(|c| c.name()).join(", "),
            })?;

        let args = words
            .join("")
            .split(',')
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(String::from)
            .collect();

        Ok((command, args))
    }

    /// Returns the board the robot is on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the robot.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Returns the settings of the simulation.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Returns the communication used to talk to the user.
    pub fn communication(&self) -> &C {
        &self.communication
    }

    /// Consumes the simulator and returns the communication.
    pub fn into_communication(self) -> C {
        self.communication
    }

    /// Returns the registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.values().copied()
    }

    /// Checks if the simulation has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.state == SimulatorState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::{Simulator, SimulatorConfig};
    use crate::command::Command;
    use crate::{Rejection, ScriptedCommunication, SimError};

    fn simulator() -> Simulator<ScriptedCommunication> {
        Simulator::new(SimulatorConfig::default(), ScriptedCommunication::default()).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parse_trigger_and_arguments() {
        let sim = simulator();
        assert_eq!(
            sim.parse_input("PLACE 1,2,NORTH"),
            Ok((Command::Place, args(&["1", "2", "NORTH"])))
        );
        assert_eq!(
            sim.parse_input(" place 0 , 1 ,   north "),
            Ok((Command::Place, args(&["0", "1", "north"])))
        );
        assert_eq!(sim.parse_input("Move"), Ok((Command::Move, args(&[]))));
        assert_eq!(
            sim.parse_input("path\t3,4"),
            Ok((Command::Path, args(&["3", "4"])))
        );
    }

    #[test]
    fn empty_arguments_are_removed() {
        let sim = simulator();
        assert_eq!(
            sim.parse_input("PLACE ,1,NORTH,"),
            Ok((Command::Place, args(&["1", "NORTH"])))
        );
        assert_eq!(
            sim.parse_input("PLACE 1 2,3,EAST"),
            Ok((Command::Place, args(&["12", "3", "EAST"])))
        );
    }

    #[test]
    fn unsupported_command() {
        let sim = simulator();
        let available = "PLACE, REPORT, MOVE, RIGHT, LEFT, PATH".to_string();
        assert_eq!(
            sim.parse_input("TEST 1,2"),
            Err(Rejection::UnsupportedCommand {
                command: "TEST".to_string(),
                available: available.clone(),
            })
        );
        assert_eq!(
            sim.parse_input("   "),
            Err(Rejection::UnsupportedCommand {
                command: String::new(),
                available,
            })
        );
    }

    #[test]
    fn registry_order() {
        let sim = simulator();
        let triggers: Vec<_> = sim.commands().map(|c| c.trigger()).collect();
        assert_eq!(
            triggers,
            vec!["place", "report", "move", "right", "left", "path"]
        );
    }

    #[test]
    fn stop_token_must_not_shadow_a_command() {
        let config = SimulatorConfig {
            stop_token: " Report ".to_string(),
            ..SimulatorConfig::default()
        };
        let result = Simulator::new(config, ScriptedCommunication::default());
        assert!(matches!(
            result,
            Err(SimError::StopTokenShadowsCommand { command: "REPORT", .. })
        ));

        let config = SimulatorConfig {
            stop_token: "  ".to_string(),
            ..SimulatorConfig::default()
        };
        let result = Simulator::new(config, ScriptedCommunication::default());
        assert!(matches!(result, Err(SimError::BlankStopToken)));
    }

    #[test]
    fn stop_ends_processing() {
        let mut sim = simulator();
        assert_eq!(sim.process_line(" StOp "), Ok(()));
        assert!(sim.is_stopped());
        assert_eq!(sim.process_line("PLACE 1,1,NORTH"), Ok(()));
        assert!(!sim.robot().is_placed());
    }
}
