use std::path::PathBuf;

use mme_model::{
    DEFAULT_MAX_DEPTH, DEFAULT_PROGRESS_INTERVAL, LogEntry, LogKind, MappingSet, RunLog,
    RunOptions, Standard, TagMap,
};

#[test]
fn run_options_defaults() {
    let options = RunOptions::new("photos.csv", "images");
    assert_eq!(options.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert!(!options.notify_broken_keys);
    assert_eq!(options.log_dir, PathBuf::from("."));

    let options = options
        .with_progress_interval(25)
        .with_notify_broken_keys(true)
        .with_max_depth(0);
    assert_eq!(options.progress_interval, 25);
    assert!(options.notify_broken_keys);
    assert_eq!(options.max_depth, 0);
}

#[test]
fn mapping_set_deserializes_from_standard_keys() {
    let json = r#"{
        "vrae": {"Author": "XMP-vrae:Author"},
        "isadg": {},
        "dc": {"Title": "dc:title", "Subject": "dc:subject"}
    }"#;
    let set: MappingSet = serde_json::from_str(json).expect("parse mapping set");
    assert_eq!(set.get(Standard::Vrae).len(), 1);
    assert!(set.get(Standard::Isadg).is_empty());
    assert_eq!(set.tag_count(), 3);

    let mut dc = TagMap::new();
    dc.insert("Title".to_string(), "dc:title".to_string());
    dc.insert("Subject".to_string(), "dc:subject".to_string());
    assert_eq!(set.get(Standard::Dc), &dc);
}

#[test]
fn delete_and_write_entries_name_the_action() {
    let path = PathBuf::from("/archive/box1/a.jpg");
    let mut log = RunLog::default();
    log.push(
        LogKind::Success,
        LogEntry::delete_succeeded(Standard::Vrae, 2, &path, "REWRITING: a.jpg"),
    );
    log.push(
        LogKind::Error,
        LogEntry::delete_failed(Standard::Isadg, 2, &path, "Error: file is read-only"),
    );
    log.push(LogKind::Success, LogEntry::write_completed(Standard::Dc, 2, &path));

    assert_eq!(
        log.successes()[0].as_str(),
        r#"On DELETE VRAE TAGS: Row: "2", filepath: "/archive/box1/a.jpg", SUCCESS: "REWRITING: a.jpg""#
    );
    assert_eq!(
        log.errors()[0].as_str(),
        r#"On DELETE ISADG TAGS: Row: "2", filepath: "/archive/box1/a.jpg", ERROR: "Error: file is read-only""#
    );
    assert_eq!(
        log.successes()[1].to_string(),
        r#"On WRITE DC TAGS: Row: "2", filepath: "/archive/box1/a.jpg""#
    );
}
