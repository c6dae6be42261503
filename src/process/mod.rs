use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessLauncher;

/// How a waited-for child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Exited(i32),
    Signaled(i32),
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Exited(code) => write!(f, "exit status {}", code),
            ExitOutcome::Signaled(signo) => write!(f, "killed by signal {}", signo),
        }
    }
}

#[derive(Debug)]
pub enum LaunchError {
    EmptyCommand,
    NotFound(String),
    Spawn {
        program: String,
        source: std::io::Error,
    },
    Wait(std::io::Error),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::EmptyCommand => write!(f, "no command given"),
            LaunchError::NotFound(cmd) => write!(f, "{}: command not found", cmd),
            LaunchError::Spawn { program, source } => write!(f, "{}: {}", program, source),
            LaunchError::Wait(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Spawn { source, .. } => Some(source),
            LaunchError::Wait(e) => Some(e),
            _ => None,
        }
    }
}
