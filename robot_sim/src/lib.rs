//! Simulation of a toy robot driven by text commands.
//!
//! The [`Simulator`](Simulator) owns the board and the robot. It reads one line at a time from a
//! [`UserCommunication`](UserCommunication), selects the [`Command`](command::Command) by the
//! first word of the line and moves the robot to the position the command returns. Commands that
//! can't be executed are answered with a [`Rejection`](Rejection) and leave the robot untouched.

pub mod command;
mod communication;
mod error;
mod simulator;

pub use crate::communication::{ResponseKind, ScriptedCommunication, UserCommunication};
pub use crate::error::{Rejection, SimError};
pub use crate::simulator::{Simulator, SimulatorConfig, SimulatorState};
