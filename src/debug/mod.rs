//! Debug module: feature gated answer reveal & round logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::session::ColorMatchSession;
#[cfg(feature = "debug")]
use crate::interaction::commands::SessionCommandSet;
#[cfg(feature = "debug")]
use crate::rendering::board::Swatch;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_round_logging_system;

        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                debug_key_input_system,
                debug_round_logging_system,
                reveal_answer_outline,
            )
                .chain()
                .after(SessionCommandSet),
        );
    }
}

/// Paints an outline around the target slot while `reveal_answer` is on.
#[cfg(feature = "debug")]
pub fn reveal_answer_outline(
    state: Res<DebugState>,
    session: Res<ColorMatchSession>,
    mut q_swatches: Query<(&Swatch, &mut Outline)>,
) {
    if !state.is_changed() && !session.is_changed() {
        return;
    }
    let target = session.target_index();
    for (swatch, mut outline) in &mut q_swatches {
        let color = if state.reveal_answer && swatch.slot == target {
            Color::WHITE
        } else {
            Color::NONE
        };
        if outline.color != color {
            outline.color = color;
        }
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
