use myshell::core::config::ShellConfig;
use myshell::shell::Shell;

fn main() -> Result<(), myshell::error::ShellError> {
    env_logger::init();

    let mut shell = Shell::new(ShellConfig::default())?;
    shell.run()
}
