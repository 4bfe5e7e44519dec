use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SAVE_KEY: &str = "CookieGameSave";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub price_growth: f64,
    pub sell_refund_divisor: u64,
    pub tap_increment: u64,
    pub tick_period_secs: f64,
    pub rapid_tap_window_secs: f64,
    pub rapid_tap_threshold: usize,
    pub starting_balance: u64,
    pub save_key: String,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            price_growth: 1.1,
            sell_refund_divisor: 2,
            tap_increment: 1,
            tick_period_secs: 1.0,
            rapid_tap_window_secs: 10.0,
            rapid_tap_threshold: 100,
            starting_balance: 0,
            save_key: DEFAULT_SAVE_KEY.to_string(),
        }
    }
}

impl EconomyConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.price_growth.is_finite() || self.price_growth <= 1.0 {
            bail!(
                "price_growth must be a finite number above 1.0, got {}",
                self.price_growth
            );
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        seconds(self.tick_period_secs, 1.0)
    }

    pub fn rapid_tap_window(&self) -> Duration {
        seconds(self.rapid_tap_window_secs, 10.0)
    }
}

fn seconds(value: f64, fallback: f64) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::from_secs_f64(value)
    } else {
        Duration::from_secs_f64(fallback)
    }
}
