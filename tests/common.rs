#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcalspan::models::{CalendarDate, CalendarEvent, Event, EventInfo, EventKind};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real configuration.
pub fn rcs() -> Command {
    let mut cmd = cargo_bin_cmd!("rcalspan");
    let home = env::temp_dir().join("rcalspan_test_home");
    fs::create_dir_all(&home).ok();
    cmd.env("RCALSPAN_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Unique temp path for `name`, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rcalspan_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Orders/demos used by most CLI tests:
/// A, B, C around 2025-01-01 and D across the Jan/Feb 2021 row boundary.
pub const SAMPLE_EVENTS_JSON: &str = r#"[
  {"id": 1, "kind": "order", "title": "Order A", "status": "approved", "installationDate": "2025-01-01"},
  {"id": 2, "kind": "demo", "title": "Demo B", "demoStartDate": "2025-01-01T09:00:00", "demoEndDate": "2025-01-03"},
  {"id": 3, "kind": "order", "title": "Order C", "installationDate": "2025-01-02"},
  {"id": 4, "kind": "demo", "title": "Demo D", "demoStartDate": "2021-01-30", "demoEndDate": "2021-02-02"},
  {"id": 5, "kind": "order", "title": "No date"}
]"#;

pub fn sample_events_file(name: &str) -> String {
    write_file(name, "json", SAMPLE_EVENTS_JSON)
}

/// Config path that does not exist, so defaults apply
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_missing_conf"), "conf")
}

pub fn d(s: &str) -> CalendarDate {
    CalendarDate::parse(s).expect("valid test date")
}

pub fn ev(id: i64, start: &str, end: &str) -> Event {
    Event::new(id, d(start), d(end), ())
}

/// Order or demo with a title and status, as the import adapters build them.
pub fn cal(id: i64, kind: EventKind, status: &str, start: &str, end: &str) -> CalendarEvent {
    let title = kind.default_title(id);
    Event::new(id, d(start), d(end), EventInfo::new(kind, title, status))
}

/// Small deterministic generator for property-style tests.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// `count` events starting within `window` days of `base`, up to `max_len` days long.
pub fn random_events(
    rng: &mut XorShift,
    count: usize,
    base: &str,
    window: u64,
    max_len: u64,
) -> Vec<Event> {
    let base = d(base);
    (0..count)
        .map(|i| {
            let start = base.add_days(rng.below(window) as i64);
            let end = start.add_days(rng.below(max_len) as i64);
            Event::new(i as i64 + 1, start, end, ())
        })
        .collect()
}

/// Max events covering one date, by checking every date.
pub fn brute_force_depth(events: &[Event]) -> usize {
    let (Some(first), Some(last)) = (
        events.iter().map(|e| e.start).min(),
        events.iter().map(|e| e.end).max(),
    ) else {
        return 0;
    };

    let mut best = 0;
    let mut day = first;
    while day <= last {
        best = best.max(events.iter().filter(|e| e.covers(day)).count());
        day = day.succ();
    }
    best
}
