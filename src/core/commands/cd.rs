use super::{Command, CommandError, Signal};
use crate::core::state::Session;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> Result<Signal, CommandError> {
        let target = args.get(1).ok_or(CommandError::MissingArgument {
            command: "cd",
            expected: "argument",
        })?;

        env::set_current_dir(target).map_err(|e| CommandError::io(target.as_str(), e))?;
        log::debug!("Changed directory to {}", target);
        Ok(Signal::Continue)
    }
}
