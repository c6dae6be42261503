use std::io;
use std::process::{Command, Stdio};

use super::{ExitOutcome, LaunchError};

/// Runs external programs in the foreground.
#[derive(Clone, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `args[0]` with the remaining arguments, inheriting stdio,
    /// environment and working directory, and blocks until it exits or is
    /// killed.
    pub fn launch(&self, args: &[String]) -> Result<ExitOutcome, LaunchError> {
        let (program, rest) = args.split_first().ok_or(LaunchError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = command.spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LaunchError::NotFound(program.clone())
            } else {
                LaunchError::Spawn {
                    program: program.clone(),
                    source: e,
                }
            }
        })?;

        let pid = child.id();
        log::debug!("Spawned '{}' as pid {}", program, pid);

        let outcome = wait_for_exit(pid as libc::pid_t)?;
        log::debug!("pid {} finished: {}", pid, outcome);
        Ok(outcome)
    }
}

/// Waits on `pid` until it exits or dies from a signal. Stop and continue
/// notifications are skipped.
fn wait_for_exit(pid: libc::pid_t) -> Result<ExitOutcome, LaunchError> {
    loop {
        let mut status: libc::c_int = 0;
        // SAFETY: `status` is a valid, writable c_int for the call's duration.
        let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(LaunchError::Wait(err));
        }

        if libc::WIFEXITED(status) {
            return Ok(ExitOutcome::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(ExitOutcome::Signaled(libc::WTERMSIG(status)));
        }
        if libc::WIFSTOPPED(status) {
            log::warn!(
                "pid {} stopped by signal {}, still waiting",
                pid,
                libc::WSTOPSIG(status)
            );
        }
    }
}
