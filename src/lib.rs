pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::core::session::{ColorMatchSession, GuessResult, Message, Mode, Rgb, SessionView};
