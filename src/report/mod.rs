// Report module: human-readable output of a batch run.

pub mod console;

pub use console::ConsoleReporter;
