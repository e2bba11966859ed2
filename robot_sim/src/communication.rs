use std::collections::VecDeque;

use crate::SimError;

/// The kind of a response, used by the communication to decide how to present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// A regular answer to a command, like the output of REPORT.
    Message,
    /// A system notice, for example a rejected command.
    Info,
    /// An application error.
    Error,
}

/// The boundary between the simulator and the user.
///
/// The simulator talks to the user exclusively through this trait.
pub trait UserCommunication {
    /// Shows `prompt` and blocks until the user entered a line.
    fn read_input(&mut self, prompt: &str) -> Result<String, SimError>;

    /// Sends `message` to the user.
    fn send_message(&mut self, message: &str, kind: ResponseKind);
}

impl<T: UserCommunication + ?Sized> UserCommunication for &mut T {
    fn read_input(&mut self, prompt: &str) -> Result<String, SimError> {
        (**self).read_input(prompt)
    }

    fn send_message(&mut self, message: &str, kind: ResponseKind) {
        (**self).send_message(message, kind)
    }
}

/// A communication replaying a fixed list of input lines and recording every response.
///
/// Once all lines have been read, further reads fail with [`SimError::InputClosed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommunication {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    responses: Vec<(String, ResponseKind)>,
}

impl ScriptedCommunication {
    /// Creates a new communication which returns `inputs` in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns all responses sent so far.
    pub fn responses(&self) -> &[(String, ResponseKind)] {
        &self.responses
    }

    /// Returns the text of all responses sent so far.
    pub fn messages(&self) -> Vec<&str> {
        self.responses.iter().map(|(msg, _)| msg.as_str()).collect()
    }

    /// Returns the prompts shown for every read.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the number of lines that have not been read yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl UserCommunication for ScriptedCommunication {
    fn read_input(&mut self, prompt: &str) -> Result<String, SimError> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(SimError::InputClosed)
    }

    fn send_message(&mut self, message: &str, kind: ResponseKind) {
        self.responses.push((message.to_string(), kind));
    }
}

#[cfg(test)]
mod tests {
    use super::{ResponseKind, ScriptedCommunication, UserCommunication};
    use crate::SimError;

    #[test]
    fn replays_inputs_in_order() {
        let mut communication = ScriptedCommunication::new(vec!["first", "second"]);
        assert_eq!(communication.read_input("> ").unwrap(), "first");
        assert_eq!(communication.remaining_inputs(), 1);
        assert_eq!(communication.read_input("> ").unwrap(), "second");
        assert!(matches!(
            communication.read_input("> "),
            Err(SimError::InputClosed)
        ));
        assert_eq!(communication.prompts().len(), 3);
    }

    #[test]
    fn records_responses() {
        let mut communication = ScriptedCommunication::default();
        let boundary: &mut dyn UserCommunication = &mut communication;
        boundary.send_message("hello", ResponseKind::Message);
        boundary.send_message("careful", ResponseKind::Info);

        assert_eq!(communication.messages(), vec!["hello", "careful"]);
        assert_eq!(communication.responses()[1].1, ResponseKind::Info);
    }
}
