// Adapters layer: concrete implementations of the domain ports for the CLI.

pub mod terminal;

pub use terminal::TerminalSurface;
