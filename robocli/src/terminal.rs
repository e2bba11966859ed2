use colored::Colorize;
use robot_sim::{ResponseKind, SimError, UserCommunication};
use std::io::{self, Read, Write};
use std::iter::Peekable;
use text_io::try_read;

type Bytes = Box<dyn Iterator<Item = u8>>;

/// Talks to the user on the terminal, reading commands line by line from stdin.
pub struct TerminalCommunication {
    input: Peekable<Bytes>,
}

impl TerminalCommunication {
    /// Creates a new communication reading from stdin.
    pub fn new() -> Self {
        let stdin: Bytes = Box::new(io::stdin().bytes().map_while(Result::ok));
        Self::from_bytes(stdin)
    }

    fn from_bytes(input: Bytes) -> Self {
        Self {
            input: terminate_last_line(input).peekable(),
        }
    }

    fn read_line(&mut self) -> Result<String, SimError> {
        if self.input.peek().is_none() {
            return Err(SimError::InputClosed);
        }

        let line: String =
            try_read!("{}\n", &mut self.input).map_err(|e| SimError::Input(e.to_string()))?;
        Ok(line.trim_end_matches('\r').to_string())
    }
}

/// Appends a newline to `input` if it doesn't end with one, so the last line reads like any other.
fn terminate_last_line(mut input: Bytes) -> Bytes {
    let mut last = b'\n';
    Box::new(std::iter::from_fn(move || match input.next() {
        Some(byte) => {
            last = byte;
            Some(byte)
        }
        None if last != b'\n' => {
            last = b'\n';
            Some(b'\n')
        }
        None => None,
    }))
}

impl UserCommunication for TerminalCommunication {
    fn read_input(&mut self, prompt: &str) -> Result<String, SimError> {
        print!("{}: ", prompt);
        io::stdout()
            .flush()
            .map_err(|e| SimError::Input(e.to_string()))?;

        self.read_line()
    }

    fn send_message(&mut self, message: &str, kind: ResponseKind) {
        match kind {
            ResponseKind::Message => println!("{}", message),
            ResponseKind::Info => println!("{}", message.yellow()),
            ResponseKind::Error => println!("{}", message.red()),
        }
    }
}

impl std::fmt::Debug for TerminalCommunication {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TerminalCommunication").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalCommunication;
    use robot_sim::SimError;

    fn terminal(input: &'static str) -> TerminalCommunication {
        TerminalCommunication::from_bytes(Box::new(input.bytes()))
    }

    #[test]
    fn reads_line_by_line() {
        let mut terminal = terminal("PLACE 1,2,NORTH\r\n\nREPORT\n");
        assert_eq!(terminal.read_line().unwrap(), "PLACE 1,2,NORTH");
        assert_eq!(terminal.read_line().unwrap(), "");
        assert_eq!(terminal.read_line().unwrap(), "REPORT");
        assert!(matches!(terminal.read_line(), Err(SimError::InputClosed)));
    }

    #[test]
    fn last_line_without_newline() {
        let mut terminal = terminal("PLACE 0,0,NORTH\nSTOP");
        assert_eq!(terminal.read_line().unwrap(), "PLACE 0,0,NORTH");
        assert_eq!(terminal.read_line().unwrap(), "STOP");
        assert!(matches!(terminal.read_line(), Err(SimError::InputClosed)));
    }

    #[test]
    fn empty_input() {
        let mut terminal = terminal("");
        assert!(matches!(terminal.read_line(), Err(SimError::InputClosed)));
    }
}
