use crate::data::Catalog;
use crate::model::{AchievementId, OwnedGenerator, UpgradeId};

use super::wallet::Wallet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub wallet: Wallet,
    pub rate: u64,
    pub generators: Vec<OwnedGenerator>,
    pub purchased_upgrades: Vec<UpgradeId>,
    pub unlocked_achievements: Vec<AchievementId>,
    pub tick_index: u64,
}

impl GameState {
    pub fn new(catalog: &Catalog, starting_balance: u64) -> Self {
        Self {
            wallet: Wallet::with_balance(starting_balance),
            rate: 0,
            generators: catalog.generators.iter().map(OwnedGenerator::fresh).collect(),
            purchased_upgrades: Vec::new(),
            unlocked_achievements: Vec::new(),
            tick_index: 0,
        }
    }

    pub fn balance(&self) -> u64 {
        self.wallet.balance()
    }

    pub fn generator(&self, id: &str) -> Option<&OwnedGenerator> {
        self.generators.iter().find(|entry| entry.id == id)
    }

    pub fn generator_mut(&mut self, id: &str) -> Option<&mut OwnedGenerator> {
        self.generators.iter_mut().find(|entry| entry.id == id)
    }

    pub fn owned(&self, id: &str) -> u64 {
        self.generator(id).map(|entry| entry.owned).unwrap_or(0)
    }

    pub fn recomputed_rate(&self) -> u64 {
        self.generators
            .iter()
            .fold(0u64, |total, entry| total.saturating_add(entry.contribution()))
    }

    pub fn is_purchased(&self, upgrade: &str) -> bool {
        self.purchased_upgrades.iter().any(|entry| entry == upgrade)
    }

    pub fn is_unlocked(&self, achievement: AchievementId) -> bool {
        self.unlocked_achievements.contains(&achievement)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::data::Catalog;

    #[test]
    fn fresh_state_tracks_every_catalog_generator() {
        let catalog = Catalog::builtin();
        let state = GameState::new(&catalog, 0);

        assert_eq!(state.generators.len(), catalog.generators.len());
        assert!(state.generators.iter().all(|entry| entry.owned == 0));
        assert_eq!(state.recomputed_rate(), 0);
        assert_eq!(state.owned("Nope"), 0);
    }

    #[test]
    fn recomputed_rate_sums_contributions() {
        let mut state = GameState::new(&Catalog::builtin(), 0);
        if let Some(finger) = state.generator_mut("Finger") {
            finger.owned = 3;
        }
        if let Some(chef) = state.generator_mut("Chef") {
            chef.owned = 2;
            chef.unit_rate = 8;
        }

        assert_eq!(state.recomputed_rate(), 3 + 16);
    }
}
