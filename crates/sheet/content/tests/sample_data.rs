//! The shipped `data/` directory loads and derives cleanly.

use std::path::PathBuf;

use sheet_content::ContentFactory;
use sheet_core::{ActorKind, DerivationEngine, ManaAttribute};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data"))
}

#[test]
fn every_sample_character_derives() {
    let factory = factory();
    let engine = DerivationEngine::new(factory.load_rules().expect("rules.toml"));
    let names = factory.character_names().expect("characters dir");
    assert!(names.len() >= 3);

    for name in names {
        let character = factory
            .load_character(&name)
            .unwrap_or_else(|e| panic!("{name}: {e:#}"));
        let derived = engine.derive(&character);
        for (_, check) in derived.checks.iter() {
            assert_eq!(check.base, derived.attributes[check.attribute].total, "{name}");
        }
        assert!(derived.movement_speed >= 0, "{name}");
    }
}

#[test]
fn sample_caster_uses_constitution_mana() {
    let factory = factory();
    let engine = DerivationEngine::new(factory.load_rules().expect("rules.toml"));
    let mira = engine.derive(&factory.load_character("mira").expect("mira"));

    assert!(mira.spellcasting);
    assert_eq!(mira.max_mana_attribute, ManaAttribute::Con);
    // ceil(12 / 2) + 2
    assert_eq!(mira.mana.max, 8);
    assert_eq!(mira.mana.expenditure_limit, 3);
    assert_eq!(mira.encumbrance.speed_decrease_threshold, 6);
}

#[test]
fn sample_race_threshold_alone_keeps_sheet_threshold() {
    let factory = factory();
    let engine = DerivationEngine::new(factory.load_rules().expect("rules.toml"));
    let rook = factory.load_character("rook").expect("rook");
    assert!(rook.items.race().is_some());

    let derived = engine.derive(&rook);
    assert_eq!(derived.encumbrance.speed_decrease_threshold, 5);
}

#[test]
fn sample_npc_passes_through() {
    let factory = factory();
    let bandit = factory.load_character("bandit").expect("bandit");
    assert_eq!(bandit.sheet.kind, ActorKind::Npc);

    let derived = DerivationEngine::default().derive(&bandit);
    assert_eq!(derived.effort.max, 40);
    assert_eq!(derived.attributes.dex.total, 12);
}
