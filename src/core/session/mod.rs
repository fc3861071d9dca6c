//! Color-match round state: palette, target, feedback message.
//!
//! Nothing here touches rendering; the board adapter reads [`SessionView`]
//! and feeds guesses back as canonical color strings.

pub mod color;
pub mod mode;
pub mod session;

pub use color::{random_palette, Rgb};
pub use mode::Mode;
pub use session::{ColorMatchSession, GuessResult, Message, SessionView};
