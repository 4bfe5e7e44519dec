use serde::{Deserialize, Serialize};

pub type GeneratorId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorDefinition {
    pub id: GeneratorId,
    pub base_rate: u64,
    pub base_cost: u64,
    #[serde(default)]
    pub description: String,
}

impl GeneratorDefinition {
    pub fn new(id: &str, base_rate: u64, base_cost: u64) -> Self {
        Self {
            id: id.to_string(),
            base_rate,
            base_cost,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedGenerator {
    pub id: GeneratorId,
    pub owned: u64,
    pub unit_rate: u64,
}

impl OwnedGenerator {
    pub fn fresh(definition: &GeneratorDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            owned: 0,
            unit_rate: definition.base_rate,
        }
    }

    pub fn contribution(&self) -> u64 {
        self.unit_rate.saturating_mul(self.owned)
    }
}
