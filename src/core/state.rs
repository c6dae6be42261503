use std::fmt;
use std::io::{self, Write};

use super::config::{AliasTable, ShellConfig};
use crate::highlight::Highlighter;

/// Everything a dispatched command may read or mutate.
pub struct Session {
    config: ShellConfig,
    shell_name: String,
    terminator: String,
    aliases: AliasTable,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    highlighter: Highlighter,
}

impl Session {
    pub fn new(config: ShellConfig) -> Self {
        Self::build(
            config,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            Highlighter::new(),
        )
    }

    /// Session writing to the given streams without colour.
    pub fn with_streams(config: ShellConfig, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self::build(config, out, err, Highlighter::plain())
    }

    fn build(
        config: ShellConfig,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
        highlighter: Highlighter,
    ) -> Self {
        Self {
            shell_name: config.shell_name.clone(),
            terminator: config.terminator.clone(),
            aliases: AliasTable::with_capacity(config.alias_capacity),
            config,
            out,
            err,
            highlighter,
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}{} ", self.shell_name, self.terminator)
    }

    pub fn shell_name(&self) -> &str {
        &self.shell_name
    }

    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// `None` restores the configured default.
    pub fn set_shell_name(&mut self, name: Option<&str>) {
        self.shell_name = name.unwrap_or(&self.config.shell_name).to_string();
    }

    /// `None` restores the configured default.
    pub fn set_terminator(&mut self, terminator: Option<&str>) {
        self.terminator = terminator.unwrap_or(&self.config.terminator).to_string();
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Writes a diagnostic line. Failures to write are ignored; there is
    /// nowhere left to report them.
    pub fn report(&mut self, message: impl fmt::Display) {
        let line = format!("{}: {}", self.shell_name, message);
        let line = self.highlighter.highlight_error(&line);
        let _ = writeln!(self.err, "{}", line);
        let _ = self.err.flush();
    }
}
