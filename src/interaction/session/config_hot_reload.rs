use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::GameConfig;

/// Files watched for changes, in layering order.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
pub struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}
impl ConfigReloadState {
    /// Records modification times; true if any watched file is newer than
    /// last seen (the first sighting of a file counts as newer).
    pub fn scan(&mut self, paths: &[PathBuf]) -> bool {
        let mut dirty = false;
        for path in paths {
            let Ok(mod_time) = std::fs::metadata(path).and_then(|m| m.modified()) else {
                continue;
            };
            let seen = self
                .last_mod
                .entry(path.clone())
                .or_insert(SystemTime::UNIX_EPOCH);
            if mod_time > *seen {
                *seen = mod_time;
                dirty = true;
            }
        }
        dirty
    }
}

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Startup, prime_reload_state)
                .add_systems(
                    Update,
                    poll_and_reload_config.run_if(|cfg: Res<GameConfig>| cfg.hot_reload),
                );
        }
    }
}

// Files already loaded at startup must not trigger an immediate reload.
fn prime_reload_state(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    state.scan(&settings.paths);
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    if !state.scan(&settings.paths) {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter().filter(|p| p.exists()));
    for e in errors.iter().chain(new_cfg.validate().iter()) {
        warn!(target: "config", "CONFIG HOT-RELOAD issue: {e}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    info!(target: "config", "Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    // Board colors follow from the config change detection in `apply_board_style`.
    *cfg_res = new_cfg;
}
