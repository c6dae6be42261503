use crate::{
    core::{config::ShellConfig, Dispatcher, Session, Signal},
    error::ShellError,
    input::{tokenize, EditorInput, LineSource, ReadOutcome},
    process::signal,
};

/// Consecutive read failures tolerated before the loop gives up.
const MAX_READ_FAILURES: usize = 8;

/// The read loop: prompt, read, tokenize, dispatch.
pub struct Shell<I: LineSource> {
    input: I,
    session: Session,
    dispatcher: Dispatcher,
}

impl Shell<EditorInput> {
    /// Interactive shell on the terminal.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        signal::install_interrupt_handler()?;
        Ok(Self::with_input(EditorInput::new()?, Session::new(config)))
    }
}

impl<I: LineSource> Shell<I> {
    pub fn with_input(input: I, session: Session) -> Self {
        Shell {
            input,
            session,
            dispatcher: Dispatcher::new(),
        }
    }

    /// Runs until a builtin asks to stop or input runs out.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut failures = 0;
        loop {
            let prompt = self.session.prompt();
            let outcome = match self.input.read_line(&prompt) {
                Ok(outcome) => outcome,
                Err(e) if failures < MAX_READ_FAILURES => {
                    failures += 1;
                    self.session.report(&e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            failures = 0;

            let line = match outcome {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    log::debug!("End of input");
                    return Ok(());
                }
            };

            let args = tokenize(&line);
            if self.dispatcher.dispatch(args, &mut self.session) == Signal::Stop {
                log::debug!("Stop requested");
                return Ok(());
            }
        }
    }

    pub fn into_parts(self) -> (I, Session) {
        (self.input, self.session)
    }
}
