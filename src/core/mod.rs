pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod state;

pub use commands::Signal;
pub use dispatcher::Dispatcher;
pub use state::Session;
