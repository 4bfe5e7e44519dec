use crate::core::GameState;
use crate::data::Catalog;

use super::{SaveGenerator, SaveSlot};

pub fn slot_from_state(name: &str, state: &GameState) -> SaveSlot {
    SaveSlot {
        name: name.to_string(),
        balance: state.balance(),
        rate: state.rate,
        generators: state
            .generators
            .iter()
            .map(|entry| SaveGenerator {
                id: entry.id.clone(),
                owned: entry.owned,
                unit_rate: Some(entry.unit_rate),
            })
            .collect(),
        unlocked_achievements: state.unlocked_achievements.clone(),
        purchased_upgrades: state.purchased_upgrades.clone(),
    }
}

/// Rebuilds a full state from a slot. Generators and upgrades the catalog
/// does not know are dropped; catalog generators missing from the slot
/// start fresh.
pub fn state_from_slot(slot: &SaveSlot, catalog: &Catalog, tick_index: u64) -> GameState {
    let mut state = GameState::new(catalog, 0);
    state.wallet.restore(slot.balance);
    state.rate = slot.rate;
    state.tick_index = tick_index;

    for entry in &slot.generators {
        let Some(generator) = state.generator_mut(&entry.id) else {
            log::warn!("save '{}' names unknown generator '{}'", slot.name, entry.id);
            continue;
        };
        generator.owned = entry.owned;
        if let Some(unit_rate) = entry.unit_rate {
            generator.unit_rate = unit_rate;
        }
    }

    for achievement in &slot.unlocked_achievements {
        if !state.unlocked_achievements.contains(achievement) {
            state.unlocked_achievements.push(*achievement);
        }
    }

    for upgrade in &slot.purchased_upgrades {
        if catalog.upgrade(upgrade).is_some() && !state.is_purchased(upgrade) {
            state.purchased_upgrades.push(upgrade.clone());
        }
    }

    state
}
