//! Output encoders.

mod terminal;

pub use terminal::TerminalEncoder;
