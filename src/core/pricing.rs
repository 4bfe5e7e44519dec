pub const DEFAULT_PRICE_GROWTH: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingModel {
    pub growth: f64,
    pub refund_divisor: u64,
}

impl Default for PricingModel {
    fn default() -> Self {
        Self {
            growth: DEFAULT_PRICE_GROWTH,
            refund_divisor: 2,
        }
    }
}

impl PricingModel {
    pub fn new(growth: f64, refund_divisor: u64) -> Self {
        let growth = if growth.is_finite() && growth > 1.0 {
            growth
        } else {
            log::warn!("price growth {growth} would not raise prices, using {DEFAULT_PRICE_GROWTH}");
            DEFAULT_PRICE_GROWTH
        };
        Self {
            growth,
            refund_divisor: refund_divisor.max(1),
        }
    }

    pub fn unit_cost(&self, base_cost: u64, position: u64) -> u64 {
        let exponent = position as f64;
        // Float-to-int `as` truncates toward zero and saturates at u64::MAX.
        (base_cost as f64 * self.growth.powf(exponent)) as u64
    }

    pub fn total_cost(&self, base_cost: u64, owned: u64, quantity: u64) -> u64 {
        let summed = (0..quantity).try_fold(0u64, |total, k| {
            let next = total.saturating_add(self.unit_cost(base_cost, owned.saturating_add(k)));
            if next == u64::MAX { Err(next) } else { Ok(next) }
        });
        match summed {
            Ok(total) | Err(total) => total,
        }
    }

    /// Like `total_cost`, but gives up with `None` as soon as the running
    /// sum passes `budget`.
    pub fn total_cost_within(
        &self,
        base_cost: u64,
        owned: u64,
        quantity: u64,
        budget: u64,
    ) -> Option<u64> {
        (0..quantity).try_fold(0u64, |total, k| {
            let next = total.checked_add(self.unit_cost(base_cost, owned.saturating_add(k)))?;
            (next <= budget).then_some(next)
        })
    }

    /// Refunds are priced from `owned`, the count left after the sale, so
    /// they cover the same curve positions as the most recent purchase.
    pub fn sell_refund(&self, base_cost: u64, owned: u64, quantity: u64) -> u64 {
        self.total_cost(base_cost, owned, quantity) / self.refund_divisor.max(1)
    }
}
