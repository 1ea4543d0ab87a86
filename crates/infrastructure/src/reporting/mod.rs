//! Run reporting

mod console;

pub use console::ConsoleReporter;
