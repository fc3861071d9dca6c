pub mod keys;

use bevy::prelude::*;

use crate::interaction::commands::SessionCommandSet;

pub struct KeyboardShortcutsPlugin;

impl Plugin for KeyboardShortcutsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keys::keyboard_shortcuts_system.before(SessionCommandSet),
        );
    }
}
