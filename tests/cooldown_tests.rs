use std::fs;
use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, NaiveDateTime};

use tradeherald::domain::UserId;
use tradeherald::store::CooldownStore;

fn stamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn repeated_use_keeps_one_line_per_user() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EggRollCooldown.txt");
    let store = CooldownStore::new(&path);

    store
        .record_use_at(UserId::new(42), stamp(2024, 1, 1, 10, 0, 0))
        .unwrap();
    store
        .record_use_at(UserId::new(42), stamp(2024, 1, 3, 18, 5, 9))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "42 - 2024-01-03 18:05:09\n");
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn second_user_appends_without_disturbing_the_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EggRollCooldown.txt");
    let store = CooldownStore::new(&path);

    store
        .record_use_at(UserId::new(42), stamp(2024, 1, 1, 10, 0, 0))
        .unwrap();
    store
        .record_use_at(UserId::new(7), stamp(2024, 1, 2, 11, 30, 0))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "42 - 2024-01-01 10:00:00\n7 - 2024-01-02 11:30:00\n"
    );
}

#[test]
fn update_preserves_record_order_and_foreign_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EggRollCooldown.txt");
    fs::write(
        &path,
        "13 - 2023-12-31 23:59:59\nnot a record at all\n42 - 2024-01-01 10:00:00\n",
    )
    .unwrap();
    let store = CooldownStore::new(&path);

    store
        .record_use_at(UserId::new(42), stamp(2024, 6, 1, 0, 0, 0))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "13 - 2023-12-31 23:59:59\nnot a record at all\n42 - 2024-06-01 00:00:00\n"
    );
}

#[test]
fn records_survive_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EggRollCooldown.txt");
    let when = stamp(2024, 1, 1, 10, 0, 0);

    {
        let store = CooldownStore::new(&path);
        store.record_use_at(UserId::new(42), when).unwrap();
    }

    let reopened = CooldownStore::new(&path);
    assert_eq!(reopened.last_use(UserId::new(42)).unwrap(), Some(when));
}

#[test]
fn missing_file_reads_as_no_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = CooldownStore::new(dir.path().join("EggRollCooldown.txt"));

    assert_eq!(store.last_use(UserId::new(42)).unwrap(), None);
}

#[test]
fn concurrent_writers_lose_no_updates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EggRollCooldown.txt");
    let store = Arc::new(CooldownStore::new(&path));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            thread::spawn(move || {
                store
                    .record_use_at(UserId::new(i), stamp(2024, 1, 1, 10, 0, i as u32))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 8);
    for i in 0..8u64 {
        assert_eq!(
            store.last_use(UserId::new(i)).unwrap(),
            Some(stamp(2024, 1, 1, 10, 0, i as u32))
        );
    }
}
