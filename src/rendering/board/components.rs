use bevy::prelude::*;

use crate::core::session::Mode;

/// One of the nine swatch slots. Slots past the active palette are hidden.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub slot: usize,
}

/// The color string a swatch currently shows; this is what a click submits
/// as the guess.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct RenderedColor(pub String);

#[derive(Component)]
pub struct BoardRoot;
#[derive(Component)]
pub struct HeaderPanel;
/// Row holding the new-colors button, status text and mode selector.
#[derive(Component)]
pub struct ControlStripe;
#[derive(Component)]
pub struct TargetReadout;
#[derive(Component)]
pub struct MessageText;
#[derive(Component)]
pub struct NewColorsButton;
#[derive(Component)]
pub struct NewColorsLabel;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeButton(pub Mode);
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeLabel(pub Mode);
