use super::commands::{BuiltinRegistry, Signal};
use super::state::Session;
use crate::process::ProcessLauncher;

/// Resolves one tokenized line: alias substitution, then builtin lookup,
/// then an external program.
#[derive(Clone, Default)]
pub struct Dispatcher {
    builtins: BuiltinRegistry,
    launcher: ProcessLauncher,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            builtins: BuiltinRegistry::new(),
            launcher: ProcessLauncher::new(),
        }
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn dispatch(&self, mut args: Vec<String>, session: &mut Session) -> Signal {
        let Some(first) = args.first_mut() else {
            return Signal::Continue;
        };

        // One level only: the target is not looked up again.
        if let Some(target) = session.aliases().resolve(first) {
            log::debug!("Alias {} -> {}", first, target);
            *first = target.to_string();
        }

        if let Some(builtin) = self.builtins.get(&args[0]) {
            log::debug!("Running builtin {}", args[0]);
            return builtin.handle(&args, session);
        }

        log::debug!("Launching external command {:?}", args);
        match self.launcher.launch(&args) {
            Ok(outcome) if !outcome.success() => {
                log::debug!("{} finished with {}", args[0], outcome);
            }
            Ok(_) => {}
            Err(e) => session.report(e),
        }
        Signal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ShellConfig;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Fixture {
        dispatcher: Dispatcher,
        session: Session,
        out: SharedBuffer,
        err: SharedBuffer,
    }

    impl Fixture {
        fn new() -> Self {
            let out = SharedBuffer::default();
            let err = SharedBuffer::default();
            let session = Session::with_streams(
                ShellConfig::default(),
                Box::new(out.clone()),
                Box::new(err.clone()),
            );
            Self {
                dispatcher: Dispatcher::new(),
                session,
                out,
                err,
            }
        }

        fn run(&mut self, parts: &[&str]) -> Signal {
            let args = parts.iter().map(|s| s.to_string()).collect();
            self.dispatcher.dispatch(args, &mut self.session)
        }
    }

    #[test]
    fn test_empty_line_is_noop() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&[]), Signal::Continue);
        assert!(fx.out.text().is_empty());
        assert!(fx.err.text().is_empty());
        assert!(fx.session.aliases().is_empty());
    }

    #[test]
    fn test_exit_and_stop_with_arguments() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&["exit"]), Signal::Stop);
        assert_eq!(fx.run(&["exit", "1", "2"]), Signal::Stop);
        assert_eq!(fx.run(&["STOP", "--force"]), Signal::Stop);
    }

    #[test]
    fn test_unknown_command_reports_and_continues() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&["nonexistent_binary_xyz"]), Signal::Continue);
        assert!(fx.err.text().contains("nonexistent_binary_xyz"));
    }

    #[test]
    fn test_failing_program_continues() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&["false"]), Signal::Continue);
        assert!(fx.err.text().is_empty());
    }

    #[test]
    fn test_alias_to_builtin() {
        let mut fx = Fixture::new();
        fx.run(&["newname", "quit", "exit"]);
        assert_eq!(fx.run(&["quit"]), Signal::Stop);
    }

    #[test]
    fn test_alias_substitution_is_single_level() {
        let mut fx = Fixture::new();
        fx.run(&["newname", "ls", "ll_nonexistent_xyz"]);
        fx.run(&["newname", "ll_nonexistent_xyz", "echo"]);

        assert_eq!(fx.run(&["ls"]), Signal::Continue);
        let err = fx.err.text();
        assert!(err.contains("ll_nonexistent_xyz"), "got: {}", err);
    }

    #[test]
    fn test_alias_keeps_remaining_arguments() {
        let mut fx = Fixture::new();
        fx.run(&["newname", "name", "setshellname"]);
        fx.run(&["name", "zz"]);
        assert_eq!(fx.session.prompt(), "zz> ");
    }

    #[test]
    fn test_builtin_errors_are_reported() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&["cd"]), Signal::Continue);
        assert_eq!(fx.run(&["newname", "missing"]), Signal::Continue);
        let err = fx.err.text();
        assert!(err.contains("\"cd\""));
        assert!(err.contains("alias not found: missing"));
    }

    #[test]
    fn test_capacity_overflow_through_dispatch() {
        let mut fx = Fixture::new();
        for i in 0..10 {
            fx.run(&["newname", &format!("a{}", i), "true"]);
        }
        fx.run(&["newname", "extra", "true"]);
        assert_eq!(fx.session.aliases().len(), 10);
        assert!(fx.err.text().contains("maximum number of aliases"));
    }

    #[test]
    fn test_help_and_list_write_to_output() {
        let mut fx = Fixture::new();
        fx.run(&["newname", "g", "git"]);
        assert_eq!(fx.run(&["help"]), Signal::Continue);
        assert_eq!(fx.run(&["listnewnames"]), Signal::Continue);

        let out = fx.out.text();
        assert!(out.contains("myshell - Available commands:"));
        assert!(out.ends_with("g -> git\n"));
    }

    #[test]
    fn test_builtin_names_are_case_sensitive() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&["EXIT"]), Signal::Continue);
        assert_eq!(fx.run(&["Stop"]), Signal::Continue);
        assert!(fx.dispatcher.builtins().is_builtin("STOP"));
    }
}
