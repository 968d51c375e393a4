// Terminal rendering for the countdown display

pub mod terminal;

pub use terminal::TerminalSurface;
