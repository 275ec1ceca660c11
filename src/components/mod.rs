pub mod filter_bar;
pub mod log_table;

pub use filter_bar::FilterBar;
pub use log_table::LogTable;
