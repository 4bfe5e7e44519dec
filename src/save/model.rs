use serde::{Deserialize, Serialize};

use crate::model::AchievementId;

pub const SAVE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveGenerator {
    pub id: String,
    pub owned: u64,
    pub unit_rate: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveSlot {
    pub name: String,
    pub balance: u64,
    pub rate: u64,
    pub generators: Vec<SaveGenerator>,
    pub unlocked_achievements: Vec<AchievementId>,
    pub purchased_upgrades: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveFile {
    pub version: u32,
    pub slots: Vec<SaveSlot>,
}

impl Default for SaveFile {
    fn default() -> Self {
        Self {
            version: SAVE_FORMAT_VERSION,
            slots: Vec::new(),
        }
    }
}
