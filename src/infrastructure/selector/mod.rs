mod terminal_selector;

pub use terminal_selector::TerminalSelector;
