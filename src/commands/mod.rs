//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs against the configured backend.

pub mod browse;
pub mod completions;
pub mod config;
pub mod search;
pub mod tags;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use search::execute as search;
pub use tags::execute as tags;
