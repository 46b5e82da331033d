use super::*;
use crate::state::transcript::Sender;
use crate::util::storage::MemoryStorage;

const KEY: &str = "gym_chatbot_history";

fn fixed_clock() -> String {
    "07:45 PM".to_owned()
}

fn history() -> HistoryStore<MemoryStorage> {
    HistoryStore::new(MemoryStorage::new(), KEY, 50)
}

/// Storage whose every operation fails, like a disabled `localStorage`.
struct BrokenStorage;

impl SlotStorage for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("denied".into()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_absent_slot_is_empty() {
    assert!(history().load().is_empty());
}

#[test]
fn load_malformed_slot_is_empty() {
    let history = history();
    history.storage().insert(KEY, "{ definitely not a transcript");
    assert!(history.load().is_empty());
}

#[test]
fn load_reads_records_written_by_earlier_sessions() {
    let history = history();
    history
        .storage()
        .insert(KEY, r#"[{"text":"Hi","sender":"user","time":"10:00 AM"},{"text":"Hello!","sender":"bot","time":"10:01 AM"}]"#);
    let loaded = history.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1], Message { text: "Hello!".into(), sender: Sender::Bot, time: "10:01 AM".into() });
}

// =============================================================
// save
// =============================================================

#[test]
fn save_then_load_round_trips_recent_window() {
    let history = history();
    for count in [1, 7, 50, 75] {
        let mut transcript = TranscriptStore::with_clock(fixed_clock);
        for i in 0..count {
            let sender = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            transcript.append(format!("line {i}\nsecond line"), sender);
        }
        history.save(&transcript);
        assert_eq!(history.load(), transcript.recent(50));
    }
}

#[test]
fn save_after_each_of_51_messages_keeps_last_50() {
    let history = history();
    let mut transcript = TranscriptStore::with_clock(fixed_clock);
    for i in 0..51 {
        transcript.append(format!("user message {i}"), Sender::User);
        history.save(&transcript);
    }
    let loaded = history.load();
    assert_eq!(loaded.len(), 50);
    assert!(loaded.iter().all(|m| m.text != "user message 0"));
    assert_eq!(loaded[0].text, "user message 1");
    assert_eq!(loaded[49].text, "user message 50");
}

#[test]
fn save_writes_json_array_of_records() {
    let history = history();
    let mut transcript = TranscriptStore::with_clock(fixed_clock);
    transcript.append("Show membership plans", Sender::User);
    history.save(&transcript);
    let raw = history.storage().get(KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "text": "Show membership plans", "sender": "user", "time": "07:45 PM" }])
    );
}

#[test]
fn save_respects_configured_limit() {
    let history = HistoryStore::new(MemoryStorage::new(), KEY, 3);
    let mut transcript = TranscriptStore::with_clock(fixed_clock);
    for i in 0..5 {
        transcript.append(format!("m{i}"), Sender::User);
    }
    history.save(&transcript);
    let texts: Vec<String> = history.load().into_iter().map(|m| m.text).collect();
    assert_eq!(texts, vec!["m2", "m3", "m4"]);
}

// =============================================================
// erase / failures
// =============================================================

#[test]
fn erase_removes_slot() {
    let history = history();
    let mut transcript = TranscriptStore::with_clock(fixed_clock);
    transcript.append("hi", Sender::User);
    history.save(&transcript);
    history.erase();
    assert_eq!(history.storage().get(KEY), None);
    assert!(history.load().is_empty());
}

#[test]
fn broken_storage_never_panics() {
    let history = HistoryStore::new(BrokenStorage, KEY, 50);
    let mut transcript = TranscriptStore::with_clock(fixed_clock);
    transcript.append("hi", Sender::User);
    history.save(&transcript);
    history.erase();
    assert!(history.load().is_empty());
}
