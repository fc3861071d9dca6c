use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use color_matcher::core::config::GameConfig;
use color_matcher::interaction::session::auto_close::{AutoCloseTimer, AutoClosePlugin};

fn test_app(auto_close: f32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));
    let mut cfg = GameConfig::default();
    cfg.window.auto_close = auto_close;
    app.insert_resource(cfg);
    app.add_plugins(AutoClosePlugin);
    app
}

/// Runs frames until the app asks to exit, giving up after `frames`.
fn run_until_exit(app: &mut App, frames: usize) -> Option<AppExit> {
    for _ in 0..frames {
        app.update();
        if let Some(exit) = app.should_exit() {
            return Some(exit);
        }
    }
    None
}

#[test]
fn exits_successfully_once_the_timer_runs_out() {
    let mut app = test_app(1.0);
    app.update();
    assert!(app.world().contains_resource::<AutoCloseTimer>());
    assert_eq!(app.should_exit(), None, "no exit on the first frame");

    assert_eq!(run_until_exit(&mut app, 30), Some(AppExit::Success));
}

#[test]
fn zero_seconds_disables_auto_close() {
    let mut app = test_app(0.0);
    assert_eq!(run_until_exit(&mut app, 30), None);
    assert!(!app.world().contains_resource::<AutoCloseTimer>());
}
