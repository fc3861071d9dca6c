use crate::core::config::GameConfig;
use crate::core::session::ColorMatchSession;
use bevy::prelude::*;

/// Countdown armed from `window.autoClose`; absent when auto close is off.
#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close)
            .add_systems(Update, tick_auto_close.run_if(resource_exists::<AutoCloseTimer>));
    }
}

pub fn arm_auto_close(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_auto_close(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    session: Option<Res<ColorMatchSession>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    let rounds = session.as_ref().map(|s| s.view().round).unwrap_or_default();
    info!("AutoClose: timer finished after {rounds} palette regenerations, requesting app exit");
    ev_exit.write(AppExit::Success);
}
