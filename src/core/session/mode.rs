use std::{fmt, str::FromStr};

/// Difficulty level; controls how many swatches are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    Easy,
    #[default]
    Hard,
    ExtraHard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Hard, Mode::ExtraHard];

    /// Largest palette any mode uses; the board allocates this many swatch slots.
    pub const MAX_PALETTE: usize = 9;

    pub const fn palette_size(self) -> usize {
        match self {
            Mode::Easy => 3,
            Mode::Hard => 6,
            Mode::ExtraHard => 9,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Mode::Easy => "Easy",
            Mode::Hard => "Hard",
            Mode::ExtraHard => "Extra Hard",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    /// Case-insensitive; `extrahard`, `extra-hard`, `extra_hard` and
    /// `extra hard` all name the same mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "easy" => Ok(Mode::Easy),
            "hard" => Ok(Mode::Hard),
            "extrahard" => Ok(Mode::ExtraHard),
            _ => Err(format!("unknown mode '{s}' (expected easy, hard or extra-hard)")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(Mode::Easy.palette_size(), 3);
        assert_eq!(Mode::Hard.palette_size(), 6);
        assert_eq!(Mode::ExtraHard.palette_size(), 9);
        assert!(Mode::ALL
            .iter()
            .all(|m| m.palette_size() <= Mode::MAX_PALETTE));
    }

    #[test]
    fn names_parse_loosely() {
        assert_eq!("Easy".parse::<Mode>(), Ok(Mode::Easy));
        assert_eq!(" hard ".parse::<Mode>(), Ok(Mode::Hard));
        for s in ["ExtraHard", "extra-hard", "extra_hard", "Extra Hard"] {
            assert_eq!(s.parse::<Mode>(), Ok(Mode::ExtraHard), "{s}");
        }
        assert!("medium".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Hard);
    }
}
