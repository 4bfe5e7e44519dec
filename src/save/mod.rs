mod backend;
mod bridge;
mod codec;
mod model;
mod slots;

pub use backend::{FileBackend, MemoryBackend, SaveBackend};
pub use bridge::{slot_from_state, state_from_slot};
pub use codec::{
    export_slot_to_base64, import_slot_from_base64, load_file_from_json_string,
    save_file_to_json_string,
};
pub use model::{SAVE_FORMAT_VERSION, SaveFile, SaveGenerator, SaveSlot};
pub use slots::SaveSlots;

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};

    use super::{
        MemoryBackend, SaveBackend, SaveGenerator, SaveSlot, SaveSlots, export_slot_to_base64,
        import_slot_from_base64, load_file_from_json_string, slot_from_state, state_from_slot,
    };
    use crate::core::EconomyEngine;
    use crate::data::Catalog;
    use crate::model::AchievementId;

    const KEY: &str = "CookieGameSave";

    struct FailingBackend;

    impl SaveBackend for FailingBackend {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            bail!("disk unplugged")
        }

        fn write(&mut self, _key: &str, _data: &str) -> Result<()> {
            bail!("disk unplugged")
        }
    }

    fn sample_slot(name: &str, balance: u64) -> SaveSlot {
        SaveSlot {
            name: name.to_string(),
            balance,
            rate: 5,
            generators: vec![
                SaveGenerator {
                    id: "Finger".to_string(),
                    owned: 1,
                    unit_rate: Some(1),
                },
                SaveGenerator {
                    id: "Chef".to_string(),
                    owned: 1,
                    unit_rate: None,
                },
            ],
            unlocked_achievements: vec![AchievementId::CookieBeginner],
            purchased_upgrades: Vec::new(),
        }
    }

    #[test]
    fn slot_json_uses_camel_case_fields() {
        let json = serde_json::to_string(&sample_slot("a", 1)).expect("serialize");

        assert!(json.contains("\"unlockedAchievements\":[\"cookie_beginner\"]"));
        assert!(json.contains("\"unitRate\":1"));
    }

    #[test]
    fn base64_export_round_trip() {
        let original = sample_slot("morning", 120);
        let encoded = export_slot_to_base64(&original).expect("export");
        let restored = import_slot_from_base64(&format!("  {encoded}\n")).expect("import");

        assert_eq!(restored, original);
    }

    #[test]
    fn garbage_base64_is_an_error() {
        assert!(import_slot_from_base64("%%%").is_err());
    }

    #[test]
    fn legacy_slots_without_optional_fields_parse() {
        let file = load_file_from_json_string(
            r#"{"slots":[{"name":"old","balance":7,"rate":1,
                "generators":[{"id":"Finger","owned":1}],
                "unlockedAchievements":[]}]}"#,
        )
        .expect("parse");

        assert_eq!(file.version, 1);
        assert_eq!(file.slots[0].generators[0].unit_rate, None);
        assert!(file.slots[0].purchased_upgrades.is_empty());
    }

    #[test]
    fn bridge_round_trip_restores_state() {
        let mut engine = EconomyEngine::default();
        for _ in 0..70 {
            engine.tap(std::time::Duration::ZERO);
        }
        engine.buy("Finger", 1).expect("finger");
        engine.buy("Chef", 1).expect("chef");

        let slot = slot_from_state("run", engine.state());
        let restored = state_from_slot(&slot, engine.catalog(), engine.state().tick_index);

        assert_eq!(&restored, engine.state());
    }

    #[test]
    fn bridge_ignores_unknown_generators() {
        let mut slot = sample_slot("odd", 3);
        slot.generators.push(SaveGenerator {
            id: "Time Machine".to_string(),
            owned: 4,
            unit_rate: Some(99),
        });
        slot.purchased_upgrades.push("Nonexistent".to_string());

        let state = state_from_slot(&slot, &Catalog::builtin(), 0);

        assert_eq!(state.owned("Finger"), 1);
        assert_eq!(state.owned("Chef"), 1);
        assert!(state.generator("Time Machine").is_none());
        assert!(state.purchased_upgrades.is_empty());
        assert_eq!(state.rate, 5);
    }

    #[test]
    fn slots_append_duplicates_and_remove_all_matches() {
        let mut backend = MemoryBackend::new();
        let mut slots = SaveSlots::new(KEY);
        slots.append(sample_slot("a", 1), &mut backend).expect("append");
        slots.append(sample_slot("b", 2), &mut backend).expect("append");
        slots.append(sample_slot("a", 3), &mut backend).expect("append");

        assert_eq!(slots.names(), vec!["a", "b", "a"]);
        assert_eq!(slots.find("a").map(|slot| slot.balance), Some(1));

        assert_eq!(slots.remove("a", &mut backend).expect("remove"), 2);
        assert_eq!(slots.names(), vec!["b"]);
        assert_eq!(slots.remove("zzz", &mut backend).expect("remove"), 0);

        let reloaded = SaveSlots::load(&backend, KEY);
        assert_eq!(reloaded, slots);
    }

    #[test]
    fn corrupt_or_unreadable_data_means_no_saves() {
        let backend = MemoryBackend::with_entry(KEY, "{not json");
        assert!(SaveSlots::load(&backend, KEY).slots().is_empty());

        assert!(SaveSlots::load(&FailingBackend, KEY).slots().is_empty());
        assert!(SaveSlots::load(&MemoryBackend::new(), KEY).slots().is_empty());
    }

    #[test]
    fn failed_writes_leave_the_list_unchanged() {
        let mut slots = SaveSlots::new(KEY);

        assert!(slots.append(sample_slot("a", 1), &mut FailingBackend).is_err());
        assert!(slots.slots().is_empty());
    }
}
