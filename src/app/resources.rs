use std::path::PathBuf;

use bevy::prelude::*;

use crate::data::{Catalog, EconomyConfig};
use crate::error::EconomyError;
use crate::save::{FileBackend, MemoryBackend, SaveBackend};
use crate::session::GameSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveLocation {
    Memory,
    Directory(PathBuf),
}

impl SaveLocation {
    pub fn open(&self) -> Box<dyn SaveBackend> {
        match self {
            Self::Memory => Box::new(MemoryBackend::new()),
            Self::Directory(dir) => Box::new(FileBackend::new(dir.clone())),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub economy: EconomyConfig,
    pub catalog: Catalog,
    pub save_location: SaveLocation,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            economy: EconomyConfig::default(),
            catalog: Catalog::builtin(),
            save_location: SaveLocation::Memory,
        }
    }
}

#[derive(Resource)]
pub struct SessionState {
    pub session: GameSession,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum EconomyCommand {
    Tap,
    Buy { generator: String, quantity: u64 },
    Sell { generator: String, quantity: u64 },
    PurchaseUpgrade { upgrade: String },
    Save { name: String },
    Load { name: String },
    Delete { name: String },
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub command: EconomyCommand,
    pub result: Result<(), EconomyError>,
}
