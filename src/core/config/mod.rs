mod alias_file;
mod aliases;

pub use alias_file::{parse_aliases, write_aliases, AliasFile};
pub use aliases::{Alias, AliasError, AliasTable};

pub const DEFAULT_SHELL_NAME: &str = "myshell";
pub const DEFAULT_TERMINATOR: &str = ">";
pub const MAX_ALIASES: usize = 10;

/// Built-in defaults a session starts from and resets to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub shell_name: String,
    pub terminator: String,
    pub alias_capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self {
            shell_name: DEFAULT_SHELL_NAME.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            alias_capacity: MAX_ALIASES,
        }
    }

    pub fn with_alias_capacity(mut self, capacity: usize) -> Self {
        self.alias_capacity = capacity;
        self
    }
}
