use super::{Command, CommandError, Signal};
use crate::core::config::AliasFile;
use crate::core::state::Session;

/// `newname <alias> <target>` adds, `newname <alias>` removes.
#[derive(Clone, Default)]
pub struct NewNameCommand;

impl NewNameCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for NewNameCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        let name = args.get(1).ok_or(CommandError::MissingArgument {
            command: "newname",
            expected: "1 or 2 arguments",
        })?;

        match args.get(2) {
            Some(target) => {
                session.aliases_mut().add(name, target)?;
                log::debug!("Added alias {} -> {}", name, target);
            }
            None => {
                let removed = session.aliases_mut().remove(name)?;
                log::debug!("Removed alias {} -> {}", removed.name, removed.target);
            }
        }
        Ok(Signal::Continue)
    }
}

#[derive(Clone, Default)]
pub struct ListNewNamesCommand;

impl ListNewNamesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListNewNamesCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        let lines: Vec<String> = session
            .aliases()
            .list()
            .iter()
            .map(|alias| format!("{} -> {}", alias.name, alias.target))
            .collect();

        let out = session.out();
        for line in lines {
            writeln!(out, "{}", line).map_err(|e| CommandError::io("listnewnames", e))?;
        }
        out.flush().map_err(|e| CommandError::io("listnewnames", e))?;
        Ok(Signal::Continue)
    }
}

#[derive(Clone, Default)]
pub struct SaveNewNamesCommand;

impl SaveNewNamesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SaveNewNamesCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        let path = args.get(1).ok_or(CommandError::MissingArgument {
            command: "savenewnames",
            expected: "a file name",
        })?;

        AliasFile::new(path)
            .save(session.aliases())
            .map_err(|e| CommandError::io(path.as_str(), e))?;
        Ok(Signal::Continue)
    }
}

#[derive(Clone, Default)]
pub struct ReadNewNamesCommand;

impl ReadNewNamesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ReadNewNamesCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Signal, CommandError> {
        let path = args.get(1).ok_or(CommandError::MissingArgument {
            command: "readnewnames",
            expected: "a file name",
        })?;

        AliasFile::new(path)
            .load_into(session.aliases_mut())
            .map_err(|e| CommandError::io(path.as_str(), e))?;
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AliasError, ShellConfig};
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;
    use tempfile::tempdir;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn session_with_capacity(capacity: usize) -> (Session, SharedBuffer) {
        let out = SharedBuffer::default();
        let session = Session::with_streams(
            ShellConfig::new().with_alias_capacity(capacity),
            Box::new(out.clone()),
            Box::new(io::sink()),
        );
        (session, out)
    }

    #[test]
    fn test_newname_add_and_remove() {
        let (mut session, _) = session_with_capacity(10);
        let cmd = NewNameCommand::new();

        cmd.execute(&args(&["newname", "g", "git"]), &mut session)
            .unwrap();
        assert_eq!(session.aliases().resolve("g"), Some("git"));

        cmd.execute(&args(&["newname", "g"]), &mut session).unwrap();
        assert_eq!(session.aliases().resolve("g"), None);
    }

    #[test]
    fn test_newname_errors() {
        let (mut session, _) = session_with_capacity(1);
        let cmd = NewNameCommand::new();

        assert!(matches!(
            cmd.execute(&args(&["newname"]), &mut session),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            cmd.execute(&args(&["newname", "nope"]), &mut session),
            Err(CommandError::Alias(AliasError::NotFound(_)))
        ));

        cmd.execute(&args(&["newname", "a", "b"]), &mut session)
            .unwrap();
        assert!(matches!(
            cmd.execute(&args(&["newname", "c", "d"]), &mut session),
            Err(CommandError::Alias(AliasError::CapacityExceeded(1)))
        ));
        assert_eq!(session.aliases().len(), 1);
    }

    #[test]
    fn test_listnewnames_output() {
        let (mut session, out) = session_with_capacity(10);
        session.aliases_mut().add("g", "git").unwrap();
        session.aliases_mut().add("ll", "ls").unwrap();

        ListNewNamesCommand::new()
            .execute(&args(&["listnewnames"]), &mut session)
            .unwrap();

        let text = String::from_utf8(out.0.borrow().clone()).unwrap();
        assert_eq!(text, "g -> git\nll -> ls\n");
    }

    #[test]
    fn test_save_and_read_commands() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        let path_arg = path.to_string_lossy().into_owned();

        let (mut session, _) = session_with_capacity(10);
        session.aliases_mut().add("g", "git").unwrap();
        SaveNewNamesCommand::new()
            .execute(&args(&["savenewnames", &path_arg]), &mut session)
            .unwrap();

        let (mut fresh, _) = session_with_capacity(10);
        ReadNewNamesCommand::new()
            .execute(&args(&["readnewnames", &path_arg]), &mut fresh)
            .unwrap();
        assert_eq!(fresh.aliases().resolve("g"), Some("git"));
    }

    #[test]
    fn test_file_commands_need_argument() {
        let (mut session, _) = session_with_capacity(10);
        assert!(matches!(
            SaveNewNamesCommand::new().execute(&args(&["savenewnames"]), &mut session),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            ReadNewNamesCommand::new().execute(&args(&["readnewnames"]), &mut session),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let path_arg = path.to_string_lossy().into_owned();
        let (mut session, _) = session_with_capacity(10);

        let result = ReadNewNamesCommand::new()
            .execute(&args(&["readnewnames", &path_arg]), &mut session);
        assert!(matches!(result, Err(CommandError::Io { .. })));
        assert!(session.aliases().is_empty());
    }
}
