pub mod app;
pub mod core;
pub mod data;
pub mod error;
pub mod model;
pub mod save;
pub mod session;

pub use crate::core::{
    AchievementEvaluator, Clock, ClockEvent, EconomyEngine, GameState, PricingModel,
    TimedReversal, Wallet,
};
pub use crate::data::{Catalog, EconomyConfig, load_catalog, load_catalog_from_path};
pub use crate::error::{EconomyError, EconomyResult, IdKind};
pub use crate::model::{
    AchievementId, GeneratorDefinition, GeneratorId, Multiplier, OwnedGenerator,
    UpgradeDefinition, UpgradeEffect, UpgradeId, UpgradeTarget,
};
pub use crate::save::{FileBackend, MemoryBackend, SaveBackend, SaveSlot, SaveSlots};
pub use crate::session::GameSession;
