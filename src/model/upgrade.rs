use serde::{Deserialize, Serialize};

use super::generator::GeneratorId;

pub type UpgradeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplier {
    pub numerator: u64,
    pub denominator: u64,
}

impl Multiplier {
    pub const DOUBLE: Self = Self::new(2, 1);
    pub const EFFICIENCY: Self = Self::new(3, 2);
    pub const TRIPLE: Self = Self::new(3, 1);

    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Scales `value`, truncating toward zero.
    pub fn apply(self, value: u64) -> u64 {
        if self.denominator == 0 {
            return value;
        }
        let scaled = u128::from(value) * u128::from(self.numerator) / u128::from(self.denominator);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }

    pub fn divisor(self) -> u64 {
        if self.denominator == 0 {
            return 1;
        }
        (self.numerator / self.denominator).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeTarget {
    Generator,
    All,
    Temporary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpgradeEffect {
    PerGenerator {
        generator: GeneratorId,
        multiplier: Multiplier,
    },
    Global { multiplier: Multiplier },
    Temporary {
        multiplier: Multiplier,
        duration_secs: u64,
    },
}

impl UpgradeEffect {
    pub fn target(&self) -> UpgradeTarget {
        match self {
            Self::PerGenerator { .. } => UpgradeTarget::Generator,
            Self::Global { .. } => UpgradeTarget::All,
            Self::Temporary { .. } => UpgradeTarget::Temporary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub id: UpgradeId,
    #[serde(default)]
    pub description: String,
    pub cost: u64,
    pub effect: UpgradeEffect,
}

impl UpgradeDefinition {
    pub fn new(id: &str, description: &str, cost: u64, effect: UpgradeEffect) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            cost,
            effect,
        }
    }
}
