use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::session::color::parse_css_color;
use crate::core::session::Mode;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 820.0,
            title: "The Great Color Game".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// `"easy"`, `"hard"` or `"extra-hard"`.
    pub default_mode: String,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}
impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_mode: "hard".into(),
            seed: None,
        }
    }
}
impl SessionConfig {
    /// Parsed starting mode; unknown names fall back to [`Mode::default`].
    pub fn mode(&self) -> Mode {
        self.default_mode.parse().unwrap_or_default()
    }
}

/// CSS-like color strings for the non-palette parts of the board.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColorsConfig {
    /// Swatch fill after a wrong guess; also the string a dimmed swatch reports.
    pub wrong: String,
    /// Header fill between rounds.
    pub header: String,
    pub background: String,
    pub button: String,
    pub selected: String,
}
impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            wrong: "#232323".into(),
            header: "steelblue".into(),
            background: "#232323".into(),
            button: "#ffffff".into(),
            selected: "steelblue".into(),
        }
    }
}
impl ColorsConfig {
    fn resolve(value: &str, fallback: &str) -> Color {
        parse_css_color(value)
            .or_else(|| parse_css_color(fallback))
            .unwrap_or(Color::BLACK)
    }
    pub fn wrong_color(&self) -> Color {
        Self::resolve(&self.wrong, "#232323")
    }
    pub fn header_color(&self) -> Color {
        Self::resolve(&self.header, "steelblue")
    }
    pub fn background_color(&self) -> Color {
        Self::resolve(&self.background, "#232323")
    }
    pub fn button_color(&self) -> Color {
        Self::resolve(&self.button, "#ffffff")
    }
    pub fn selected_color(&self) -> Color {
        Self::resolve(&self.selected, "steelblue")
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub session: SessionConfig,
    pub colors: ColorsConfig,
    pub hot_reload: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            session: Default::default(),
            colors: Default::default(),
            hot_reload: true,
        }
    }
}
impl GameConfig {
    pub fn from_ron_str(data: &str) -> Result<Self, String> {
        ron::from_str(data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        Self::from_ron_str(&data)
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Loads every readable file in order, deep-merging maps so later files
    /// override only the keys they mention. Returns the config, the paths that
    /// contributed, and any read/parse problems.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if bm.iter().any(|(ek, _)| *ek == k) {
                            if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                                merge_value(ev, v);
                            }
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width < 300.0 || self.window.height < 400.0 {
            w.push(format!(
                "small window {}x{}; a 3x3 board may not fit",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if let Err(e) = self.session.default_mode.parse::<Mode>() {
            w.push(format!("session.default_mode: {e}; using {}", Mode::default()));
        }
        let c = &self.colors;
        for (label, value) in [
            ("colors.wrong", &c.wrong),
            ("colors.header", &c.header),
            ("colors.background", &c.background),
            ("colors.button", &c.button),
            ("colors.selected", &c.selected),
        ] {
            if parse_css_color(value).is_none() {
                w.push(format!("{label} '{value}' is not a recognized color; using default"));
            }
        }
        if parse_css_color(&c.wrong).is_some() && c.wrong.trim().starts_with("rgb(") {
            w.push(format!(
                "colors.wrong '{}' uses rgb() form; a palette color could render identically",
                c.wrong
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.session.mode(), Mode::Hard);
        assert_eq!(cfg.colors.wrong, "#232323");
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let cfg = GameConfig::from_ron_str(r#"(session: (default_mode: "easy", seed: Some(3)))"#)
            .expect("parse");
        assert_eq!(cfg.session.mode(), Mode::Easy);
        assert_eq!(cfg.session.seed, Some(3));
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn unknown_mode_warns_and_defaults() {
        let mut cfg = GameConfig::default();
        cfg.session.default_mode = "nightmare".into();
        assert_eq!(cfg.session.mode(), Mode::Hard);
        assert!(cfg
            .validate()
            .iter()
            .any(|w| w.contains("session.default_mode")));
    }

    #[test]
    fn bad_color_falls_back() {
        let mut cfg = GameConfig::default();
        cfg.colors.header = "not-a-color".into();
        assert_eq!(cfg.colors.header_color(), Color::srgb_u8(70, 130, 180));
        assert!(cfg.validate().iter().any(|w| w.contains("colors.header")));
    }
}
