#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use crate::core::session::ColorMatchSession;

#[cfg(feature = "debug")]
pub fn debug_round_logging_system(session: Res<ColorMatchSession>, mut state: ResMut<DebugState>) {
    let view = session.view();
    if state.last_logged_round == Some(view.round) {
        return;
    }
    state.last_logged_round = Some(view.round);
    if !state.log_rounds {
        return;
    }
    let palette: Vec<String> = view.palette.iter().map(|c| c.canonical()).collect();
    info!(
        target: "debug",
        "ROUND round={} mode={} target_slot={} target={} palette=[{}]",
        view.round,
        view.mode,
        session.target_index(),
        view.target,
        palette.join(" | ")
    );
}
