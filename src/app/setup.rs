use bevy::prelude::*;

use crate::session::GameSession;

use super::resources::{RuntimeConfig, SessionState};

pub fn bootstrap_session(mut commands: Commands, config: Res<RuntimeConfig>) {
    let session = GameSession::new(
        config.catalog.clone(),
        config.economy.clone(),
        config.save_location.open(),
    );
    commands.insert_resource(SessionState { session });
}
