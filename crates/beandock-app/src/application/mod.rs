pub mod config;
pub mod runner;
pub mod services;
pub mod utils;

pub use utils::ResultExt;
