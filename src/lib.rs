pub mod cli;
pub mod error;
pub mod summary;
pub mod types;
pub mod utils;
