use super::{Command, CommandError, Signal};
use crate::core::state::Session;

/// `setshellname [<name>]`; no argument restores the default.
#[derive(Clone, Default)]
pub struct SetShellNameCommand;

impl SetShellNameCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetShellNameCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        session.set_shell_name(args.get(1).map(String::as_str));
        Ok(Signal::Continue)
    }
}

/// `setterminator [<symbol>]`; no argument restores the default.
#[derive(Clone, Default)]
pub struct SetTerminatorCommand;

impl SetTerminatorCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetTerminatorCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        session.set_terminator(args.get(1).map(String::as_str));
        Ok(Signal::Continue)
    }
}
