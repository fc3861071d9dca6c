use bevy::prelude::Resource;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::color::{random_palette, Rgb};
use super::mode::Mode;

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Message {
    /// Fresh session, nothing has happened yet.
    #[default]
    Unset,
    PickAColor,
    Correct,
    TryAgain,
}

impl Message {
    pub const fn text(self) -> &'static str {
        match self {
            Message::Unset => "",
            Message::PickAColor => "Pick a Color",
            Message::Correct => "Correct",
            Message::TryAgain => "Try Again",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Incorrect,
}

/// Read-only snapshot handed to the board after every transition.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub mode: Mode,
    pub palette: &'a [Rgb],
    pub target: Rgb,
    pub message: Message,
    /// Bumped whenever the palette is regenerated.
    pub round: u64,
    /// A guess this round was correct; cleared only by regeneration.
    pub won: bool,
}

impl SessionView<'_> {
    /// Canonical target string for the header readout.
    pub fn target_text(&self) -> String {
        self.target.canonical()
    }
}

/// Owns one game: mode, palette, target and feedback message.
///
/// Invariants after every call: `palette.len() == mode.palette_size()` and
/// `palette[target_index]` is the target.
#[derive(Resource, Debug, Clone)]
pub struct ColorMatchSession {
    mode: Mode,
    palette: Vec<Rgb>,
    target_index: usize,
    message: Message,
    round: u64,
    won: bool,
    rng: StdRng,
}

impl ColorMatchSession {
    pub fn new(mode: Mode, mut rng: StdRng) -> Self {
        let palette = random_palette(mode.palette_size(), &mut rng);
        let target_index = rng.gen_range(0..palette.len());
        Self {
            mode,
            palette,
            target_index,
            message: Message::Unset,
            round: 0,
            won: false,
            rng,
        }
    }

    pub fn with_seed(mode: Mode, seed: u64) -> Self {
        Self::new(mode, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(mode: Mode) -> Self {
        Self::new(mode, StdRng::from_entropy())
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            mode: self.mode,
            palette: &self.palette,
            target: self.target(),
            message: self.message,
            round: self.round,
            won: self.won,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn target(&self) -> Rgb {
        self.palette[self.target_index]
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn message(&self) -> Message {
        self.message
    }

    /// Switch difficulty. Selecting the active mode changes nothing.
    pub fn set_mode(&mut self, mode: Mode) -> SessionView<'_> {
        if mode != self.mode {
            self.mode = mode;
            self.regenerate();
        }
        self.view()
    }

    /// New palette and target for the current mode.
    pub fn reset(&mut self) -> SessionView<'_> {
        self.regenerate();
        self.view()
    }

    /// Exact string comparison against the target's canonical form; a
    /// differently formatted spelling of the same channels does not match.
    /// Guessing after a win is allowed and celebrates again.
    pub fn guess(&mut self, candidate: &str) -> GuessResult {
        if candidate == self.target().canonical() {
            self.message = Message::Correct;
            self.won = true;
            GuessResult::Correct
        } else {
            self.message = Message::TryAgain;
            GuessResult::Incorrect
        }
    }

    fn regenerate(&mut self) {
        self.palette = random_palette(self.mode.palette_size(), &mut self.rng);
        self.target_index = self.rng.gen_range(0..self.palette.len());
        self.message = Message::PickAColor;
        self.won = false;
        self.round += 1;
    }
}

impl Default for ColorMatchSession {
    fn default() -> Self {
        Self::from_entropy(Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: Mode) -> ColorMatchSession {
        ColorMatchSession::with_seed(mode, 0xC0FFEE)
    }

    #[test]
    fn fresh_session_is_hard_with_blank_message() {
        let s = ColorMatchSession::default();
        assert_eq!(s.mode(), Mode::Hard);
        assert_eq!(s.palette().len(), 6);
        assert_eq!(s.message(), Message::Unset);
        assert_eq!(s.message().text(), "");
        assert_eq!(s.view().round, 0);
    }

    #[test]
    fn set_mode_resizes_palette() {
        let mut s = session(Mode::Hard);
        for m in [Mode::Easy, Mode::ExtraHard, Mode::Hard, Mode::Easy] {
            let view = s.set_mode(m);
            assert_eq!(view.palette.len(), m.palette_size());
            assert_eq!(view.message, Message::PickAColor);
        }
    }

    #[test]
    fn same_mode_is_a_no_op() {
        let mut s = session(Mode::Easy);
        s.guess("nope");
        let before_palette = s.palette().to_vec();
        let before_target = s.target_index();
        let view = s.set_mode(Mode::Easy);
        assert_eq!(view.palette, &before_palette[..]);
        assert_eq!(view.round, 0);
        assert_eq!(view.message, Message::TryAgain);
        assert_eq!(s.target_index(), before_target);
    }

    #[test]
    fn reset_keeps_mode_and_bumps_round() {
        let mut s = session(Mode::ExtraHard);
        for i in 1..=5 {
            let view = s.reset();
            assert_eq!(view.mode, Mode::ExtraHard);
            assert_eq!(view.palette.len(), 9);
            assert_eq!(view.round, i);
            assert_eq!(view.message, Message::PickAColor);
        }
    }

    #[test]
    fn guess_is_string_exact() {
        let mut s = session(Mode::Hard);
        let t = s.target();
        assert_eq!(s.guess(&t.canonical()), GuessResult::Correct);
        assert_eq!(s.message(), Message::Correct);

        let spaced = format!("rgb({},{},{})", t.r, t.g, t.b);
        assert_eq!(s.guess(&spaced), GuessResult::Incorrect);
        assert_eq!(s.guess(&t.canonical().to_uppercase()), GuessResult::Incorrect);
        assert_eq!(s.guess(&format!(" {}", t.canonical())), GuessResult::Incorrect);
        assert_eq!(s.message(), Message::TryAgain);
    }

    #[test]
    fn win_flag_survives_wrong_guesses_until_regeneration() {
        let mut s = session(Mode::Easy);
        let target = s.target().canonical();
        s.guess(&target);
        assert!(s.view().won);
        s.guess("#232323");
        assert!(s.view().won);
        assert_eq!(s.guess(&target), GuessResult::Correct);
        s.reset();
        assert!(!s.view().won);
    }
}
