//! Logbook persistence against the on-disk store.

use fishbuddy_logbook::{CatchLogEntry, EntryField, JsonFileStore, LoadState, LogbookStore};

const KEY: &str = "fishingLogs";

fn catch(bait: &str, species: &str) -> CatchLogEntry {
    let mut entry = CatchLogEntry::default();
    entry.set(EntryField::Bait, bait);
    entry.set(EntryField::FishSpecies, species);
    entry.set(EntryField::Date, "2024-05-18");
    entry
}

#[test]
fn test_entries_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = LogbookStore::open(JsonFileStore::open(dir.path()).unwrap(), KEY);
        store.append(catch("Worm", "Perch"));
        store.append(catch("Minnow", "Pike"));
        store.append(catch("Spoon", "Salmon"));
        store.remove_at(1);
    }

    let store = LogbookStore::open(JsonFileStore::open(dir.path()).unwrap(), KEY);
    assert_eq!(store.load_state(), &LoadState::Loaded);
    assert_eq!(store.len(), 2);
    assert_eq!(store.entries()[0], catch("Worm", "Perch"));
    assert_eq!(store.entries()[1], catch("Spoon", "Salmon"));
}

#[test]
fn test_reads_existing_storage_format() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fishingLogs.json"),
        r#"[{"bait":"Jig","fishSpot":"Riverbank","weather":"Sunny","date":"2024-07-02",
            "catchDetails":"Zander","weight":"1.8","length":"52","gear":"Boat"}]"#,
    )
    .unwrap();

    let store = LogbookStore::open(JsonFileStore::open(dir.path()).unwrap(), KEY);

    let entry = &store.entries()[0];
    assert_eq!(entry.fish_spot, "Riverbank");
    assert_eq!(entry.fish_species, "Zander");
    assert_eq!(entry.length, "52");
}

#[test]
fn test_corrupt_file_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fishingLogs.json"), "[{\"bait\":").unwrap();

    let mut store = LogbookStore::open(JsonFileStore::open(dir.path()).unwrap(), KEY);
    assert!(matches!(store.load_state(), LoadState::Failed(_)));

    store.append(catch("Worm", "Roach"));

    let backup = std::fs::read_to_string(dir.path().join("fishingLogs.corrupt.json")).unwrap();
    assert_eq!(backup, "[{\"bait\":");
    let current = std::fs::read_to_string(dir.path().join("fishingLogs.json")).unwrap();
    assert!(current.contains("Roach"));
}

#[test]
fn test_unreadable_file_survives_append() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("fishingLogs.json");
    let original: &[u8] = b"[{\"bait\":\"Worm\xff\"}]";
    std::fs::write(&slot, original).unwrap();

    let mut store = LogbookStore::open(JsonFileStore::open(dir.path()).unwrap(), KEY);
    assert!(matches!(store.load_state(), LoadState::Failed(_)));

    store.append(CatchLogEntry::default());

    assert!(store.is_dirty());
    assert_eq!(std::fs::read(&slot).unwrap(), original);
}
