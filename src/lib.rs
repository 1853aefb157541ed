pub mod config;
pub mod days;
pub mod guard;
pub mod logging;

pub use config::Config;
