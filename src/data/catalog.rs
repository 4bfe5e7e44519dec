use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::{GeneratorDefinition, Multiplier, UpgradeDefinition, UpgradeEffect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub generators: Vec<GeneratorDefinition>,
    #[serde(default)]
    pub upgrades: Vec<UpgradeDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        let generators = vec![
            GeneratorDefinition::new("Finger", 1, 10),
            GeneratorDefinition::new("Chef", 4, 50),
            GeneratorDefinition::new("Farm", 16, 200),
            GeneratorDefinition::new("Mine", 64, 800),
            GeneratorDefinition::new("Factory", 256, 3200),
            GeneratorDefinition::new("Bank", 1024, 12800),
        ];

        let upgrades = vec![
            UpgradeDefinition::new(
                "Golden Finger",
                "Double the CPS of fingers.",
                500,
                per_generator("Finger", Multiplier::DOUBLE),
            ),
            UpgradeDefinition::new(
                "Farm Efficiency",
                "Farms are 50% more efficient.",
                2000,
                per_generator("Farm", Multiplier::EFFICIENCY),
            ),
            UpgradeDefinition::new(
                "Double the Dough",
                "Doubles the CPS of all items.",
                10000,
                UpgradeEffect::Global {
                    multiplier: Multiplier::DOUBLE,
                },
            ),
            UpgradeDefinition::new(
                "Banker's Delight",
                "Banks generate 2x cookies.",
                50000,
                per_generator("Bank", Multiplier::DOUBLE),
            ),
            UpgradeDefinition::new(
                "Efficient Farms",
                "Farms are 50% more efficient, again.",
                15000,
                per_generator("Farm", Multiplier::EFFICIENCY),
            ),
            UpgradeDefinition::new(
                "Factory Booster",
                "Factories generate 2x cookies.",
                100000,
                per_generator("Factory", Multiplier::DOUBLE),
            ),
            UpgradeDefinition::new(
                "Golden Era",
                "Triple CPS for 30 seconds.",
                200000,
                UpgradeEffect::Temporary {
                    multiplier: Multiplier::TRIPLE,
                    duration_secs: 30,
                },
            ),
        ];

        Self {
            generators,
            upgrades,
        }
    }

    pub fn generator(&self, id: &str) -> Option<&GeneratorDefinition> {
        self.generators.iter().find(|entry| entry.id == id)
    }

    pub fn upgrade(&self, id: &str) -> Option<&UpgradeDefinition> {
        self.upgrades.iter().find(|entry| entry.id == id)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for generator in &self.generators {
            if !seen.insert(generator.id.as_str()) {
                bail!("duplicate generator id `{}`", generator.id);
            }
            if generator.base_rate == 0 || generator.base_cost == 0 {
                bail!(
                    "generator `{}` needs a positive base rate and base cost",
                    generator.id
                );
            }
        }

        let mut seen = HashSet::new();
        for upgrade in &self.upgrades {
            if !seen.insert(upgrade.id.as_str()) {
                bail!("duplicate upgrade id `{}`", upgrade.id);
            }
            if upgrade.cost == 0 {
                bail!("upgrade `{}` needs a positive cost", upgrade.id);
            }
            match &upgrade.effect {
                UpgradeEffect::PerGenerator { generator, .. } if self.generator(generator).is_none() => {
                    bail!(
                        "upgrade `{}` targets unknown generator `{generator}`",
                        upgrade.id
                    );
                }
                UpgradeEffect::PerGenerator { multiplier, .. }
                | UpgradeEffect::Global { multiplier }
                | UpgradeEffect::Temporary { multiplier, .. }
                    if multiplier.denominator == 0 =>
                {
                    bail!("upgrade `{}` has a zero multiplier denominator", upgrade.id);
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn per_generator(generator: &str, multiplier: Multiplier) -> UpgradeEffect {
    UpgradeEffect::PerGenerator {
        generator: generator.to_string(),
        multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::{GeneratorDefinition, UpgradeTarget};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("builtin catalog should validate");
        assert_eq!(catalog.generators.len(), 6);
        assert_eq!(catalog.upgrades.len(), 7);
        assert_eq!(
            catalog.upgrade("Golden Era").map(|entry| entry.effect.target()),
            Some(UpgradeTarget::Temporary)
        );
        assert_eq!(
            catalog.upgrade("Double the Dough").map(|entry| entry.effect.target()),
            Some(UpgradeTarget::All)
        );
    }

    #[test]
    fn validation_rejects_duplicates_and_dangling_targets() {
        let mut catalog = Catalog::builtin();
        catalog
            .generators
            .push(GeneratorDefinition::new("Finger", 1, 10));
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::builtin();
        catalog.generators.retain(|entry| entry.id != "Bank");
        let err = catalog.validate().expect_err("Banker's Delight should dangle");
        assert!(err.to_string().contains("Bank"));
    }

    #[test]
    fn validation_rejects_zero_cost_generators() {
        let mut catalog = Catalog::builtin();
        catalog.generators[0].base_cost = 0;
        assert!(catalog.validate().is_err());
    }
}
