use freeplay_games::registry;

#[test]
fn test_all_is_sorted_and_duplicate_free() {
    let entries = registry::all();
    assert!(!entries.is_empty());
    for pair in entries.windows(2) {
        assert!(
            pair[0].name < pair[1].name,
            "registry listing must be sorted and duplicate-free: {} vs {}",
            pair[0].name,
            pair[1].name,
        );
    }
}

#[test]
fn test_shipped_titles_are_registered() {
    for name in ["breakout", "freeway", "pong", "space_invaders"] {
        assert!(registry::find(name).is_some(), "missing title {name}");
    }
}

#[test]
fn test_find_unknown_title() {
    assert!(registry::find("polybius").is_none());
    assert!(registry::create("polybius").is_none());
}

#[test]
fn test_entry_names_match_adapter_identifiers() {
    for entry in registry::all() {
        let settings = (entry.create)();
        assert_eq!(
            settings.rom(),
            entry.name,
            "registry name and adapter identifier diverged",
        );
    }
}

#[test]
fn test_create_yields_a_ready_rom() {
    let rom = registry::create("breakout").expect("breakout is registered");
    assert_eq!(rom.name(), "breakout");
}
