use crate::data::Catalog;
use crate::model::AchievementId;

use super::state::GameState;

#[derive(Debug, Clone, Copy)]
pub struct AchievementContext<'a> {
    pub state: &'a GameState,
    pub catalog: &'a Catalog,
    pub recent_taps: usize,
}

type Predicate = fn(&AchievementContext<'_>, &AchievementEvaluator) -> bool;

const RULES: [(AchievementId, Predicate); 8] = [
    (AchievementId::CookieBeginner, balance_at_least::<100>),
    (AchievementId::CookieEnthusiast, balance_at_least::<10_000>),
    (AchievementId::MasterBaker, balance_at_least::<1_000_000>),
    (AchievementId::QuickClicker, rate_at_least::<100>),
    (AchievementId::InvestmentMaster, owns_ten_of_everything),
    (AchievementId::UpgradeCollector, owns_every_upgrade),
    (AchievementId::UltimateTycoon, balance_at_least::<10_000_000_000>),
    (AchievementId::RapidTapper, tapped_rapidly),
];

fn balance_at_least<const N: u64>(ctx: &AchievementContext<'_>, _: &AchievementEvaluator) -> bool {
    ctx.state.balance() >= N
}

fn rate_at_least<const N: u64>(ctx: &AchievementContext<'_>, _: &AchievementEvaluator) -> bool {
    ctx.state.rate >= N
}

fn owns_ten_of_everything(ctx: &AchievementContext<'_>, _: &AchievementEvaluator) -> bool {
    ctx.catalog
        .generators
        .iter()
        .all(|generator| ctx.state.owned(&generator.id) >= 10)
}

fn owns_every_upgrade(ctx: &AchievementContext<'_>, _: &AchievementEvaluator) -> bool {
    ctx.catalog
        .upgrades
        .iter()
        .all(|upgrade| ctx.state.is_purchased(&upgrade.id))
}

fn tapped_rapidly(ctx: &AchievementContext<'_>, evaluator: &AchievementEvaluator) -> bool {
    ctx.recent_taps >= evaluator.rapid_tap_threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementEvaluator {
    pub rapid_tap_threshold: usize,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self {
            rapid_tap_threshold: 100,
        }
    }
}

impl AchievementEvaluator {
    pub fn new(rapid_tap_threshold: usize) -> Self {
        Self {
            rapid_tap_threshold,
        }
    }

    pub fn newly_unlocked(&self, ctx: &AchievementContext<'_>) -> Vec<AchievementId> {
        RULES
            .iter()
            .filter(|(id, _)| !ctx.state.is_unlocked(*id))
            .filter(|(_, predicate)| predicate(ctx, self))
            .map(|(id, _)| *id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AchievementContext, AchievementEvaluator, RULES};
    use crate::core::state::GameState;
    use crate::data::Catalog;
    use crate::model::AchievementId;

    fn unlocked_for(state: &GameState, recent_taps: usize) -> Vec<AchievementId> {
        let catalog = Catalog::builtin();
        AchievementEvaluator::default().newly_unlocked(&AchievementContext {
            state,
            catalog: &catalog,
            recent_taps,
        })
    }

    #[test]
    fn rule_table_follows_declared_order() {
        let ids = RULES.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        assert_eq!(ids, AchievementId::ALL.to_vec());
    }

    #[test]
    fn balance_thresholds_unlock_in_order() {
        let state = GameState::new(&Catalog::builtin(), 10_000_000_000);

        assert_eq!(
            unlocked_for(&state, 0),
            vec![
                AchievementId::CookieBeginner,
                AchievementId::CookieEnthusiast,
                AchievementId::MasterBaker,
                AchievementId::UltimateTycoon,
            ]
        );
    }

    #[test]
    fn thresholds_are_inclusive() {
        let state = GameState::new(&Catalog::builtin(), 99);
        assert!(unlocked_for(&state, 0).is_empty());

        let state = GameState::new(&Catalog::builtin(), 100);
        assert_eq!(unlocked_for(&state, 0), vec![AchievementId::CookieBeginner]);
    }

    #[test]
    fn already_unlocked_achievements_are_skipped() {
        let mut state = GameState::new(&Catalog::builtin(), 500);
        state.unlocked_achievements.push(AchievementId::CookieBeginner);

        assert!(unlocked_for(&state, 0).is_empty());
    }

    #[test]
    fn rate_generator_and_upgrade_rules() {
        let catalog = Catalog::builtin();
        let mut state = GameState::new(&catalog, 0);
        state.rate = 100;
        for generator in &mut state.generators {
            generator.owned = 10;
        }
        state.purchased_upgrades = catalog.upgrades.iter().map(|entry| entry.id.clone()).collect();

        assert_eq!(
            unlocked_for(&state, 0),
            vec![
                AchievementId::QuickClicker,
                AchievementId::InvestmentMaster,
                AchievementId::UpgradeCollector,
            ]
        );
    }

    #[test]
    fn rapid_taps_need_the_full_threshold() {
        let state = GameState::new(&Catalog::builtin(), 0);

        assert!(unlocked_for(&state, 99).is_empty());
        assert_eq!(unlocked_for(&state, 100), vec![AchievementId::RapidTapper]);
    }
}
