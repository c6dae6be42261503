use super::{Command, CommandError, Signal};
use crate::core::state::Session;

const USAGE: &[(&str, &str, &str)] = &[
    ("help", "", "Show this help message."),
    ("exit", "", "Terminate the shell session."),
    ("STOP", "", "Terminate the shell session."),
    ("cd", "<dir>", "Change the working directory."),
    ("setshellname", "[<name>]", "Set the shell prompt name."),
    ("setterminator", "[<symbol>]", "Set the prompt terminator."),
    (
        "newname",
        "<new_name> [<old_name>]",
        "Create an alias, or remove it when only <new_name> is given.",
    ),
    ("listnewnames", "", "List all aliases."),
    ("savenewnames", "<file_name>", "Save aliases to a file."),
    ("readnewnames", "<file_name>", "Read aliases from a file."),
];

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        let highlighter = *session.highlighter();
        let title = format!("{} - Available commands:", session.shell_name());
        let out = session.out();

        let mut write_help = || -> std::io::Result<()> {
            writeln!(out, "{}", title)?;
            for (name, params, description) in USAGE {
                if params.is_empty() {
                    writeln!(out, "  {}: {}", highlighter.highlight_command(name), description)?;
                } else {
                    writeln!(
                        out,
                        "  {} {}: {}",
                        highlighter.highlight_command(name),
                        params,
                        description
                    )?;
                }
            }
            writeln!(out, "  <command> [args...]: Run any program found on PATH.")?;
            out.flush()
        };

        write_help().map_err(|e| CommandError::io("help", e))?;
        Ok(Signal::Continue)
    }
}
