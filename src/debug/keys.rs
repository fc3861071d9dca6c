#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use bevy::prelude::*;

/// `F1` toggles the answer outline, `F2` toggles round logging.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keys.just_pressed(KeyCode::F1) {
        state.reveal_answer = !state.reveal_answer;
        info!(target: "debug", "reveal_answer={}", state.reveal_answer);
    }
    if keys.just_pressed(KeyCode::F2) {
        state.log_rounds = !state.log_rounds;
        info!(target: "debug", "log_rounds={}", state.log_rounds);
    }
}
