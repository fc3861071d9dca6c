//! Player intents flowing into [`ColorMatchSession`] and repaint requests
//! flowing back out to the board.
//!
//! Every command is applied synchronously, in arrival order, within the frame
//! it was written.

use bevy::prelude::*;

use crate::core::session::{ColorMatchSession, GuessResult, Mode};

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A swatch was clicked; carries the swatch's currently rendered color
    /// string and its slot index.
    SwatchClicked { slot: usize, color: String },
    ModeSelected(Mode),
    ResetRequested,
}

/// What the board has to redraw after a command.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRepaint {
    /// Palette regenerated: refill swatches, revert header, relabel buttons.
    NewRound,
    /// Correct guess: every swatch and the header take the target color.
    Celebrate,
    /// Wrong guess: only this slot turns the neutral "wrong" color.
    Dim { slot: usize },
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SessionCommandSet;

pub struct SessionCommandsPlugin;

impl Plugin for SessionCommandsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SessionCommand>()
            .add_event::<BoardRepaint>()
            .init_resource::<ColorMatchSession>()
            .add_systems(Update, apply_session_commands.in_set(SessionCommandSet));
    }
}

pub fn apply_session_commands(
    mut commands_in: EventReader<SessionCommand>,
    mut session: ResMut<ColorMatchSession>,
    mut repaint: EventWriter<BoardRepaint>,
) {
    for cmd in commands_in.read() {
        match cmd {
            SessionCommand::SwatchClicked { slot, color } => match session.guess(color) {
                GuessResult::Correct => {
                    info!(target: "session", "guess slot={slot} color={color} -> correct");
                    repaint.write(BoardRepaint::Celebrate);
                }
                GuessResult::Incorrect => {
                    debug!(target: "session", "guess slot={slot} color={color} -> try again");
                    repaint.write(BoardRepaint::Dim { slot: *slot });
                }
            },
            SessionCommand::ModeSelected(mode) => {
                let before = session.view().round;
                let view = session.set_mode(*mode);
                if view.round != before {
                    info!(target: "session", "mode -> {} ({} colors)", view.mode, view.palette.len());
                    repaint.write(BoardRepaint::NewRound);
                }
            }
            SessionCommand::ResetRequested => {
                let view = session.reset();
                info!(target: "session", "reset round={} mode={}", view.round, view.mode);
                repaint.write(BoardRepaint::NewRound);
            }
        }
    }
}
