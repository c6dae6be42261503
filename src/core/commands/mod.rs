use std::collections::BTreeMap;

mod alias;
mod builtin;
mod cd;
mod help;
mod prompt;

pub use alias::{ListNewNamesCommand, NewNameCommand, ReadNewNamesCommand, SaveNewNamesCommand};
pub use builtin::ExitCommand;
pub use cd::CdCommand;
pub use help::HelpCommand;
pub use prompt::{SetShellNameCommand, SetTerminatorCommand};

use super::config::AliasError;
use super::state::Session;

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

#[derive(Debug)]
pub enum CommandError {
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    Alias(AliasError),
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl CommandError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Io {
            context: context.into(),
            source,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument { command, expected } => {
                write!(f, "expected {} to \"{}\"", expected, command)
            }
            CommandError::Alias(err) => write!(f, "{}", err),
            CommandError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<AliasError> for CommandError {
    fn from(err: AliasError) -> Self {
        CommandError::Alias(err)
    }
}

/// A builtin's body. `args[0]` is the name the command was invoked under.
pub trait Command {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError>;
}

#[derive(Clone)]
pub enum Builtin {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
    SetShellName(SetShellNameCommand),
    SetTerminator(SetTerminatorCommand),
    NewName(NewNameCommand),
    ListNewNames(ListNewNamesCommand),
    SaveNewNames(SaveNewNamesCommand),
    ReadNewNames(ReadNewNamesCommand),
}

impl Command for Builtin {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        match self {
            Builtin::Cd(cmd) => cmd.execute(args, session),
            Builtin::Help(cmd) => cmd.execute(args, session),
            Builtin::Exit(cmd) => cmd.execute(args, session),
            Builtin::SetShellName(cmd) => cmd.execute(args, session),
            Builtin::SetTerminator(cmd) => cmd.execute(args, session),
            Builtin::NewName(cmd) => cmd.execute(args, session),
            Builtin::ListNewNames(cmd) => cmd.execute(args, session),
            Builtin::SaveNewNames(cmd) => cmd.execute(args, session),
            Builtin::ReadNewNames(cmd) => cmd.execute(args, session),
        }
    }
}

impl Builtin {
    /// Runs the builtin, reporting any failure on the session's diagnostic
    /// stream. A failed builtin never stops the shell.
    pub fn handle(&self, args: &[String], session: &mut Session) -> Signal {
        match self.execute(args, session) {
            Ok(signal) => signal,
            Err(e) => {
                session.report(&e);
                Signal::Continue
            }
        }
    }
}

/// The fixed set of builtins, keyed by their exact, case-sensitive name.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, Builtin>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", Builtin::Cd(CdCommand::new()));
        commands.insert("help", Builtin::Help(HelpCommand::new()));
        commands.insert("exit", Builtin::Exit(ExitCommand::new()));
        commands.insert(
            "setshellname",
            Builtin::SetShellName(SetShellNameCommand::new()),
        );
        commands.insert(
            "setterminator",
            Builtin::SetTerminator(SetTerminatorCommand::new()),
        );
        commands.insert("newname", Builtin::NewName(NewNameCommand::new()));
        commands.insert(
            "listnewnames",
            Builtin::ListNewNames(ListNewNamesCommand::new()),
        );
        commands.insert(
            "savenewnames",
            Builtin::SaveNewNames(SaveNewNamesCommand::new()),
        );
        commands.insert(
            "readnewnames",
            Builtin::ReadNewNames(ReadNewNamesCommand::new()),
        );
        // Upper-case alias of `exit`, kept for compatibility.
        commands.insert("STOP", Builtin::Exit(ExitCommand::new()));

        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.commands.get(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
