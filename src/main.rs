use std::env;
use std::path::PathBuf;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use cookie_economy::app::{EconomyPlugin, RuntimeConfig, SaveLocation, SessionState};
use cookie_economy::{Catalog, EconomyConfig, load_catalog_from_path};

const CONFIG_ENV: &str = "COOKIE_ECONOMY_CONFIG";
const CATALOG_ENV: &str = "COOKIE_ECONOMY_CATALOG";
const SAVE_DIR_ENV: &str = "COOKIE_ECONOMY_SAVE_DIR";

fn main() {
    env_logger::init();

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 30.0),
        )))
        .add_plugins(EconomyPlugin)
        .insert_resource(runtime_config())
        .insert_resource(ProgressReport(Timer::from_seconds(10.0, TimerMode::Repeating)))
        .add_systems(Update, report_progress)
        .run();
}

#[derive(Resource)]
struct ProgressReport(Timer);

fn runtime_config() -> RuntimeConfig {
    let economy = match env::var_os(CONFIG_ENV) {
        Some(path) => EconomyConfig::load_from_path(&path).unwrap_or_else(|err| {
            log::error!("falling back to default config: {err:#}");
            EconomyConfig::default()
        }),
        None => EconomyConfig::default(),
    };

    let catalog = match env::var_os(CATALOG_ENV) {
        Some(path) => load_catalog_from_path(&path).unwrap_or_else(|err| {
            log::error!("falling back to builtin catalog: {err:#}");
            Catalog::builtin()
        }),
        None => Catalog::builtin(),
    };

    let save_dir = env::var_os(SAVE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("saves"));

    RuntimeConfig {
        economy,
        catalog,
        save_location: SaveLocation::Directory(save_dir),
    }
}

fn report_progress(
    time: Res<Time>,
    mut report: ResMut<ProgressReport>,
    session: Option<Res<SessionState>>,
) {
    if !report.0.tick(time.delta()).just_finished() {
        return;
    }
    let Some(state) = session else {
        return;
    };
    let snapshot = state.session.snapshot();
    log::info!(
        "balance {} | rate {}/tick | {} achievement(s) | saves {:?}",
        snapshot.balance(),
        snapshot.rate,
        snapshot.unlocked_achievements.len(),
        state.session.list_saves()
    );
}
