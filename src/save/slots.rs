use anyhow::Result;

use super::backend::SaveBackend;
use super::codec::{load_file_from_json_string, save_file_to_json_string};
use super::{SAVE_FORMAT_VERSION, SaveFile, SaveSlot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlots {
    key: String,
    slots: Vec<SaveSlot>,
}

impl SaveSlots {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            slots: Vec::new(),
        }
    }

    pub fn load(backend: &dyn SaveBackend, key: &str) -> Self {
        let mut collection = Self::new(key);
        let raw = match backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return collection,
            Err(err) => {
                log::warn!("could not read saves under '{key}': {err:#}");
                return collection;
            }
        };
        match load_file_from_json_string(&raw) {
            Ok(file) => collection.slots = file.slots,
            Err(err) => log::warn!("ignoring corrupt saves under '{key}': {err:#}"),
        }
        collection
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slots(&self) -> &[SaveSlot] {
        &self.slots
    }

    pub fn names(&self) -> Vec<String> {
        self.slots.iter().map(|slot| slot.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&SaveSlot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Appends a slot and rewrites the whole collection. Name collisions
    /// produce a second slot with the same name.
    pub fn append(&mut self, slot: SaveSlot, backend: &mut dyn SaveBackend) -> Result<()> {
        let mut next = self.slots.clone();
        next.push(slot);
        self.commit(next, backend)
    }

    pub fn remove(&mut self, name: &str, backend: &mut dyn SaveBackend) -> Result<usize> {
        let next = self
            .slots
            .iter()
            .filter(|slot| slot.name != name)
            .cloned()
            .collect::<Vec<_>>();
        let removed = self.slots.len() - next.len();
        if removed > 0 {
            self.commit(next, backend)?;
        }
        Ok(removed)
    }

    fn commit(&mut self, slots: Vec<SaveSlot>, backend: &mut dyn SaveBackend) -> Result<()> {
        let file = SaveFile {
            version: SAVE_FORMAT_VERSION,
            slots,
        };
        let json = save_file_to_json_string(&file)?;
        backend.write(&self.key, &json)?;
        self.slots = file.slots;
        Ok(())
    }
}
