pub mod animated_logger;
pub mod report_printer;
pub mod terminal_progress;
