pub mod analyze;
pub mod error;
pub mod listing;
pub mod progress;
pub mod server;
pub mod utils;
