use std::time::Duration;

use crate::data::{Catalog, EconomyConfig};
use crate::error::{EconomyError, EconomyResult, IdKind};
use crate::model::{AchievementId, UpgradeEffect};

use super::achievements::{AchievementContext, AchievementEvaluator};
use super::pricing::PricingModel;
use super::state::GameState;
use super::tap_window::TapWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedReversal {
    pub divisor: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EconomyEngine {
    catalog: Catalog,
    pricing: PricingModel,
    evaluator: AchievementEvaluator,
    state: GameState,
    taps: TapWindow,
    tap_increment: u64,
}

impl Default for EconomyEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin(), &EconomyConfig::default())
    }
}

impl EconomyEngine {
    pub fn new(catalog: Catalog, config: &EconomyConfig) -> Self {
        let state = GameState::new(&catalog, config.starting_balance);
        Self {
            catalog,
            pricing: PricingModel::new(config.price_growth, config.sell_refund_divisor),
            evaluator: AchievementEvaluator::new(config.rapid_tap_threshold),
            state,
            taps: TapWindow::new(config.rapid_tap_window()),
            tap_increment: config.tap_increment,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pricing(&self) -> &PricingModel {
        &self.pricing
    }

    pub fn recent_taps(&self) -> usize {
        self.taps.len()
    }

    pub fn tick(&mut self) -> Vec<AchievementId> {
        self.state.tick_index += 1;
        self.state.wallet.deposit(self.state.rate);
        self.check_achievements()
    }

    pub fn tap(&mut self, now: Duration) -> Vec<AchievementId> {
        self.state.wallet.deposit(self.tap_increment);
        self.taps.record(now);
        self.check_achievements()
    }

    pub fn quote_buy(&self, id: &str, quantity: u64) -> EconomyResult<u64> {
        let definition = self
            .catalog
            .generator(id)
            .ok_or_else(|| EconomyError::unknown(IdKind::Generator, id))?;
        Ok(self
            .pricing
            .total_cost(definition.base_cost, self.state.owned(id), quantity))
    }

    pub fn quote_sell(&self, id: &str, quantity: u64) -> EconomyResult<u64> {
        let definition = self
            .catalog
            .generator(id)
            .ok_or_else(|| EconomyError::unknown(IdKind::Generator, id))?;
        let owned = self.state.owned(id);
        if owned < quantity {
            return Err(EconomyError::InsufficientInventory {
                requested: quantity,
                owned,
            });
        }
        Ok(self
            .pricing
            .sell_refund(definition.base_cost, owned - quantity, quantity))
    }

    pub fn buy(&mut self, id: &str, quantity: u64) -> EconomyResult<u64> {
        if quantity == 0 {
            return Err(EconomyError::InvalidQuantity);
        }
        let base_cost = self
            .catalog
            .generator(id)
            .ok_or_else(|| EconomyError::unknown(IdKind::Generator, id))?
            .base_cost;
        let owned = self.state.owned(id);
        let available = self.state.balance();
        let Some(cost) = self
            .pricing
            .total_cost_within(base_cost, owned, quantity, available)
        else {
            return Err(EconomyError::InsufficientFunds {
                needed: self.pricing.total_cost(base_cost, owned, quantity),
                available,
            });
        };
        self.state.wallet.withdraw(cost)?;

        let Some(generator) = self.state.generator_mut(id) else {
            return Err(EconomyError::unknown(IdKind::Generator, id));
        };
        generator.owned = generator.owned.saturating_add(quantity);
        let added = generator.unit_rate.saturating_mul(quantity);
        self.state.rate = self.state.rate.saturating_add(added);

        log::debug!("bought {quantity} x {id} for {cost}, rate now {}", self.state.rate);
        self.check_achievements();
        Ok(cost)
    }

    pub fn sell(&mut self, id: &str, quantity: u64) -> EconomyResult<u64> {
        if quantity == 0 {
            return Err(EconomyError::InvalidQuantity);
        }
        let refund = self.quote_sell(id, quantity)?;

        let Some(generator) = self.state.generator_mut(id) else {
            return Err(EconomyError::unknown(IdKind::Generator, id));
        };
        generator.owned -= quantity;
        let removed = generator.unit_rate.saturating_mul(quantity);
        // A rate already divided by an expired buff can sit below the
        // per-unit sum, so this subtraction saturates.
        self.state.rate = self.state.rate.saturating_sub(removed);
        self.state.wallet.deposit(refund);

        log::debug!("sold {quantity} x {id} for {refund}, rate now {}", self.state.rate);
        self.check_achievements();
        Ok(refund)
    }

    pub fn purchase_upgrade(&mut self, id: &str) -> EconomyResult<Option<TimedReversal>> {
        let upgrade = self
            .catalog
            .upgrade(id)
            .ok_or_else(|| EconomyError::unknown(IdKind::Upgrade, id))?
            .clone();
        if self.state.is_purchased(id) {
            return Err(EconomyError::AlreadyPurchased(id.to_string()));
        }
        self.state.wallet.withdraw(upgrade.cost)?;

        let reversal = match &upgrade.effect {
            UpgradeEffect::PerGenerator {
                generator,
                multiplier,
            } => {
                if let Some(entry) = self.state.generator_mut(generator) {
                    entry.unit_rate = multiplier.apply(entry.unit_rate);
                }
                self.state.rate = self.state.recomputed_rate();
                None
            }
            UpgradeEffect::Global { multiplier } => {
                for entry in &mut self.state.generators {
                    entry.unit_rate = multiplier.apply(entry.unit_rate);
                }
                self.state.rate = self.state.recomputed_rate();
                None
            }
            UpgradeEffect::Temporary {
                multiplier,
                duration_secs,
            } => {
                self.state.rate = multiplier.apply(self.state.rate);
                Some(TimedReversal {
                    divisor: multiplier.divisor(),
                    delay: Duration::from_secs(*duration_secs),
                })
            }
        };
        self.state.purchased_upgrades.push(upgrade.id.clone());

        log::debug!(
            "purchased upgrade {} for {}, rate now {}",
            upgrade.id,
            upgrade.cost,
            self.state.rate
        );
        self.check_achievements();
        Ok(reversal)
    }

    /// Undoes a timed upgrade by dividing whatever the rate is right now.
    pub fn revert_temporary(&mut self, divisor: u64) {
        let before = self.state.rate;
        self.state.rate /= divisor.max(1);
        log::debug!("temporary boost expired, rate {before} -> {}", self.state.rate);
    }

    pub fn check_achievements(&mut self) -> Vec<AchievementId> {
        let unlocked = self.evaluator.newly_unlocked(&AchievementContext {
            state: &self.state,
            catalog: &self.catalog,
            recent_taps: self.taps.len(),
        });
        for achievement in &unlocked {
            log::info!("achievement unlocked: {}", achievement.title());
            self.state.unlocked_achievements.push(*achievement);
        }
        unlocked
    }

    pub fn replace_state(&mut self, state: GameState) {
        self.state = state;
        self.taps.clear();
    }
}
