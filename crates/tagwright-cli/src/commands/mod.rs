pub mod config;
pub mod map;

pub use map::run_map;
