mod resources;
mod setup;
mod simulation;

use bevy::prelude::*;

pub use resources::{CommandOutcome, EconomyCommand, RuntimeConfig, SaveLocation, SessionState};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RuntimeConfig>()
            .add_event::<EconomyCommand>()
            .add_event::<CommandOutcome>()
            .add_systems(Startup, setup::bootstrap_session)
            .add_systems(
                Update,
                (
                    simulation::apply_economy_commands,
                    simulation::advance_session_clock,
                )
                    .chain(),
            )
            .add_systems(Last, simulation::stop_session_on_exit);
    }
}
