use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{SaveFile, SaveSlot};

pub fn save_file_to_json_string(save_file: &SaveFile) -> Result<String> {
    serde_json::to_string(save_file).context("failed to serialize save file to JSON")
}

pub fn load_file_from_json_string(json: &str) -> Result<SaveFile> {
    serde_json::from_str(json).context("failed to parse save file JSON")
}

pub fn export_slot_to_base64(slot: &SaveSlot) -> Result<String> {
    let json = serde_json::to_string(slot).context("failed to serialize save slot to JSON")?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn import_slot_from_base64(encoded: &str) -> Result<SaveSlot> {
    let trimmed = encoded.trim();
    let raw = STANDARD
        .decode(trimmed)
        .context("failed to decode base64 save payload")?;
    let json = String::from_utf8(raw).context("decoded base64 payload is not UTF-8")?;
    serde_json::from_str(&json).context("failed to parse save slot JSON")
}
