use std::time::Duration;

use crate::core::{Clock, ClockEvent, EconomyEngine, GameState};
use crate::data::{Catalog, EconomyConfig};
use crate::error::{EconomyError, EconomyResult, IdKind};
use crate::model::AchievementId;
use crate::save::{
    MemoryBackend, SaveBackend, SaveSlot, SaveSlots, export_slot_to_base64,
    import_slot_from_base64, slot_from_state, state_from_slot,
};

pub struct GameSession {
    engine: EconomyEngine,
    clock: Clock,
    saves: SaveSlots,
    backend: Box<dyn SaveBackend>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(
            Catalog::builtin(),
            EconomyConfig::default(),
            Box::new(MemoryBackend::new()),
        )
    }
}

impl GameSession {
    pub fn new(catalog: Catalog, config: EconomyConfig, backend: Box<dyn SaveBackend>) -> Self {
        let saves = SaveSlots::load(backend.as_ref(), &config.save_key);
        log::info!(
            "session started with {} save(s) under '{}'",
            saves.slots().len(),
            saves.key()
        );
        Self {
            engine: EconomyEngine::new(catalog, &config),
            clock: Clock::new(config.tick_period()),
            saves,
            backend,
        }
    }

    pub fn snapshot(&self) -> &GameState {
        self.engine.state()
    }

    pub fn engine(&self) -> &EconomyEngine {
        &self.engine
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn advance(&mut self, elapsed: Duration) -> Vec<AchievementId> {
        let mut unlocked = Vec::new();
        for fired in self.clock.advance(elapsed) {
            match fired.event {
                ClockEvent::Tick => unlocked.extend(self.engine.tick()),
                ClockEvent::RevertTemporary { divisor } => self.engine.revert_temporary(divisor),
            }
        }
        unlocked
    }

    pub fn tap(&mut self) -> Vec<AchievementId> {
        self.engine.tap(self.clock.now())
    }

    pub fn buy(&mut self, generator: &str, quantity: u64) -> EconomyResult<u64> {
        self.engine.buy(generator, quantity)
    }

    pub fn sell(&mut self, generator: &str, quantity: u64) -> EconomyResult<u64> {
        self.engine.sell(generator, quantity)
    }

    pub fn purchase_upgrade(&mut self, upgrade: &str) -> EconomyResult<()> {
        if let Some(reversal) = self.engine.purchase_upgrade(upgrade)? {
            self.clock.schedule(
                reversal.delay,
                ClockEvent::RevertTemporary {
                    divisor: reversal.divisor,
                },
            );
        }
        Ok(())
    }

    pub fn save(&mut self, name: &str) -> EconomyResult<()> {
        let slot = slot_from_state(name, self.engine.state());
        self.saves
            .append(slot, self.backend.as_mut())
            .map_err(|err| {
                log::warn!("saving '{name}' failed: {err:#}");
                EconomyError::serialization(&err)
            })?;
        log::info!("saved game as '{name}'");
        Ok(())
    }

    pub fn load(&mut self, name: &str) -> EconomyResult<()> {
        let slot = self
            .saves
            .find(name)
            .ok_or_else(|| EconomyError::unknown(IdKind::Save, name))?;
        let state = state_from_slot(slot, self.engine.catalog(), self.engine.state().tick_index);
        self.engine.replace_state(state);
        log::info!("loaded save '{name}'");
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> EconomyResult<()> {
        let removed = self
            .saves
            .remove(name, self.backend.as_mut())
            .map_err(|err| {
                log::warn!("deleting '{name}' failed: {err:#}");
                EconomyError::serialization(&err)
            })?;
        if removed == 0 {
            return Err(EconomyError::unknown(IdKind::Save, name));
        }
        log::info!("deleted {removed} save(s) named '{name}'");
        Ok(())
    }

    pub fn list_saves(&self) -> Vec<String> {
        self.saves.names()
    }

    pub fn saves(&self) -> &[SaveSlot] {
        self.saves.slots()
    }

    pub fn export_save(&self, name: &str) -> EconomyResult<String> {
        let slot = self
            .saves
            .find(name)
            .ok_or_else(|| EconomyError::unknown(IdKind::Save, name))?;
        export_slot_to_base64(slot).map_err(|err| EconomyError::serialization(&err))
    }

    pub fn import_save(&mut self, encoded: &str) -> EconomyResult<String> {
        let slot = import_slot_from_base64(encoded).map_err(|err| {
            log::warn!("rejected imported save: {err:#}");
            EconomyError::serialization(&err)
        })?;
        let name = slot.name.clone();
        self.saves
            .append(slot, self.backend.as_mut())
            .map_err(|err| EconomyError::serialization(&err))?;
        log::info!("imported save '{name}'");
        Ok(name)
    }

    pub fn shutdown(&mut self) {
        self.clock.stop();
        log::info!("session stopped at {:?}", self.clock.now());
    }
}
