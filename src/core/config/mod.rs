pub mod config;

pub use config::{ColorsConfig, GameConfig, SessionConfig, WindowConfig};
