use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use clap::Parser;

use color_matcher::interaction::session::config_hot_reload::ConfigReloadSettings;
use color_matcher::{ColorMatchSession, GameConfig, GamePlugin, Mode};

#[cfg(target_arch = "wasm32")]
const EMBEDDED_CONFIG: &str = include_str!("../assets/config/game.ron");

#[derive(Parser, Debug)]
#[command(name = "color_matcher", about = "Guess which swatch matches the rgb() readout")]
struct Args {
    /// Config layers, later files override earlier ones
    #[arg(long = "config", value_name = "PATH", num_args = 1..)]
    config: Vec<PathBuf>,
    /// Starting difficulty (overrides session.default_mode)
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Fixed RNG seed for reproducible palettes
    #[arg(long)]
    seed: Option<u64>,
}

/// Config problems found before logging is up; reported on startup.
#[derive(Resource, Default)]
struct StartupReport {
    used: Vec<String>,
    issues: Vec<String>,
}

fn report_config(report: Res<StartupReport>) {
    if !report.used.is_empty() {
        info!(target: "config", "loaded config layers: {}", report.used.join(", "));
    }
    for issue in &report.issues {
        warn!(target: "config", "{issue}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(paths: &[PathBuf]) -> (GameConfig, StartupReport) {
    // Missing optional layers are skipped quietly; the watcher still tracks them.
    let (cfg, used, mut issues) = GameConfig::load_layered(paths.iter().filter(|p| p.exists()));
    issues.extend(cfg.validate());
    (cfg, StartupReport { used, issues })
}

#[cfg(target_arch = "wasm32")]
fn load_config(_paths: &[PathBuf]) -> (GameConfig, StartupReport) {
    match GameConfig::from_ron_str(EMBEDDED_CONFIG) {
        Ok(cfg) => {
            let issues = cfg.validate();
            (cfg, StartupReport { used: vec!["<embedded>".into()], issues })
        }
        Err(e) => (
            GameConfig::default(),
            StartupReport { used: Vec::new(), issues: vec![format!("embedded config: {e}")] },
        ),
    }
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let paths = if args.config.is_empty() {
        ConfigReloadSettings::default().paths
    } else {
        // Explicit layers must exist; the default local overlay is optional.
        for p in &args.config {
            std::fs::metadata(p).with_context(|| format!("config file {}", p.display()))?;
        }
        args.config.clone()
    };

    let (cfg, report) = load_config(&paths);
    let mode = args.mode.unwrap_or_else(|| cfg.session.mode());
    let session = match args.seed.or(cfg.session.seed) {
        Some(seed) => ColorMatchSession::with_seed(mode, seed),
        None => ColorMatchSession::from_entropy(mode),
    };

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: true,
        ..default()
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .insert_resource(cfg)
        .insert_resource(session)
        .insert_resource(ConfigReloadSettings { paths, ..default() })
        .insert_resource(report)
        .add_systems(Startup, report_config)
        .add_plugins(GamePlugin)
        .run();

    if let AppExit::Error(code) = exit {
        bail!("color_matcher exited with code {code}");
    }
    Ok(())
}
