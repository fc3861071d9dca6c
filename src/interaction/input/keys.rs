use bevy::prelude::*;

use crate::core::session::{ColorMatchSession, Mode};
use crate::interaction::commands::SessionCommand;
use crate::rendering::board::{RenderedColor, Swatch};

const SLOT_KEYS: [KeyCode; Mode::MAX_PALETTE] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// `1`..`9` pick a swatch, `E`/`H`/`X` pick a mode, `N`/`Space` deal new colors.
pub fn keyboard_shortcuts_system(
    keys: Res<ButtonInput<KeyCode>>,
    session: Res<ColorMatchSession>,
    q_swatches: Query<(&Swatch, &RenderedColor)>,
    mut out: EventWriter<SessionCommand>,
) {
    let active = session.mode().palette_size();
    for (slot, key) in SLOT_KEYS.iter().enumerate().take(active) {
        if !keys.just_pressed(*key) {
            continue;
        }
        if let Some((_, color)) = q_swatches.iter().find(|(s, _)| s.slot == slot) {
            out.write(SessionCommand::SwatchClicked {
                slot,
                color: color.0.clone(),
            });
        }
    }
    for (key, mode) in [
        (KeyCode::KeyE, Mode::Easy),
        (KeyCode::KeyH, Mode::Hard),
        (KeyCode::KeyX, Mode::ExtraHard),
    ] {
        if keys.just_pressed(key) {
            out.write(SessionCommand::ModeSelected(mode));
        }
    }
    if keys.any_just_pressed([KeyCode::KeyN, KeyCode::Space]) {
        out.write(SessionCommand::ResetRequested);
    }
}
