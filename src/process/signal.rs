/// Keeps SIGINT from killing the shell. A foreground child still receives
/// the signal with its default disposition, since exec resets handlers.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        log::debug!("Interrupt received");
    })
}
