use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use cookie_economy::app::{CommandOutcome, EconomyCommand, EconomyPlugin, SessionState};
use cookie_economy::{EconomyError, IdKind};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(EconomyPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app.update();
    app
}

fn collect_outcomes(app: &App) -> Vec<CommandOutcome> {
    app.world()
        .resource::<Events<CommandOutcome>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}

#[test]
fn commands_apply_in_submission_order() {
    let mut app = headless_app();

    for _ in 0..10 {
        app.world_mut().send_event(EconomyCommand::Tap);
    }
    app.world_mut().send_event(EconomyCommand::Buy {
        generator: "Finger".to_string(),
        quantity: 1,
    });
    app.world_mut().send_event(EconomyCommand::Buy {
        generator: "Finger".to_string(),
        quantity: 1,
    });
    app.world_mut().send_event(EconomyCommand::Load {
        name: "missing".to_string(),
    });
    app.update();

    let outcomes = collect_outcomes(&app);
    assert_eq!(outcomes.len(), 13);
    assert!(outcomes[..11].iter().all(|outcome| outcome.result.is_ok()));
    assert_eq!(
        outcomes[11].result,
        Err(EconomyError::InsufficientFunds {
            needed: 11,
            available: 0
        })
    );
    assert_eq!(
        outcomes[12].result,
        Err(EconomyError::UnknownId {
            kind: IdKind::Save,
            id: "missing".to_string()
        })
    );

    let session = &app.world().resource::<SessionState>().session;
    assert_eq!(session.snapshot().owned("Finger"), 1);
    assert_eq!(session.snapshot().rate, 1);
}

#[test]
fn frame_time_drives_ticks() {
    let mut app = headless_app();
    for _ in 0..10 {
        app.world_mut().send_event(EconomyCommand::Tap);
    }
    app.world_mut().send_event(EconomyCommand::Buy {
        generator: "Finger".to_string(),
        quantity: 1,
    });
    app.update();

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    for _ in 0..20 {
        app.update();
    }

    let session = &app.world().resource::<SessionState>().session;
    let elapsed = session.now();
    assert!(elapsed >= Duration::from_secs(4));
    assert_eq!(session.snapshot().balance(), elapsed.as_secs());
}
