use super::{Command, CommandError, Signal};
use crate::core::state::Session;

/// Ends the session. Registered as both `exit` and `STOP`; arguments are
/// ignored.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Signal, CommandError> {
        Ok(Signal::Stop)
    }
}
