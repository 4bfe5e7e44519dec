mod achievement;
mod generator;
mod upgrade;

pub use achievement::AchievementId;
pub use generator::{GeneratorDefinition, GeneratorId, OwnedGenerator};
pub use upgrade::{
    Multiplier, UpgradeDefinition, UpgradeEffect, UpgradeId, UpgradeTarget,
};
