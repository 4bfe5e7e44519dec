use bevy::app::AppExit;
use bevy::prelude::*;

use super::resources::{CommandOutcome, EconomyCommand, SessionState};

pub fn apply_economy_commands(
    mut commands: EventReader<EconomyCommand>,
    mut outcomes: EventWriter<CommandOutcome>,
    session: Option<ResMut<SessionState>>,
) {
    let Some(mut state) = session else {
        return;
    };
    let session = &mut state.session;

    for command in commands.read() {
        let result = match command {
            EconomyCommand::Tap => {
                session.tap();
                Ok(())
            }
            EconomyCommand::Buy {
                generator,
                quantity,
            } => session.buy(generator, *quantity).map(|_| ()),
            EconomyCommand::Sell {
                generator,
                quantity,
            } => session.sell(generator, *quantity).map(|_| ()),
            EconomyCommand::PurchaseUpgrade { upgrade } => session.purchase_upgrade(upgrade),
            EconomyCommand::Save { name } => session.save(name),
            EconomyCommand::Load { name } => session.load(name),
            EconomyCommand::Delete { name } => session.delete(name),
        };
        outcomes.send(CommandOutcome {
            command: command.clone(),
            result,
        });
    }
}

pub fn advance_session_clock(time: Res<Time>, session: Option<ResMut<SessionState>>) {
    if let Some(mut state) = session {
        state.session.advance(time.delta());
    }
}

pub fn stop_session_on_exit(exits: EventReader<AppExit>, session: Option<ResMut<SessionState>>) {
    if exits.is_empty() {
        return;
    }
    if let Some(mut state) = session {
        state.session.shutdown();
    }
}
