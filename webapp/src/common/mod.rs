pub mod config;
pub mod listener;
pub mod state;
pub mod style;
