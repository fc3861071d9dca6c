#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Clone)]
pub struct DebugState {
    /// Outline the target swatch on the board.
    pub reveal_answer: bool,
    /// Log every round's palette and target.
    pub log_rounds: bool,
    pub last_logged_round: Option<u64>,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            reveal_answer: false,
            log_rounds: true,
            last_logged_round: None,
        }
    }
}
