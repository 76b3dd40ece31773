mod common;
use common::{no_config, rcs, sample_events_file, temp_path, write_file};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_span_reports_position() {
    rcs()
        .args(["span", "2025-01-02", "2025-01-01", "2025-01-03"])
        .args(["--config", &no_config("span")])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_days: 3"))
        .stdout(predicate::str::contains("day_index:  1"))
        .stdout(predicate::str::contains("is_middle:  true"))
        .stdout(predicate::str::contains("event (day 2/3)"));
}

#[test]
fn test_span_outside_range() {
    rcs()
        .args(["span", "2025-01-09", "2025-01-01", "2025-01-03"])
        .args(["--config", &no_config("span_out")])
        .assert()
        .success()
        .stdout(predicate::str::contains("is outside"));
}

#[test]
fn test_span_rejects_bad_input() {
    rcs()
        .args(["span", "2025-01-02", "2025-01-05", "2025-01-01"])
        .args(["--config", &no_config("span_inv")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));

    rcs()
        .args(["span", "2025-02-30", "2025-01-01", "2025-03-01"])
        .args(["--config", &no_config("span_bad")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format: 2025-02-30"));
}

#[test]
fn test_grid_month_includes_padding_days() {
    rcs()
        .args(["grid", "2021-01-15", "--view", "month", "--no-color"])
        .args(["--config", &no_config("grid_month")])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021-01"))
        .stdout(predicate::str::contains("12-28"))
        .stdout(predicate::str::contains("02-07"))
        .stdout(predicate::str::contains("02-08").not());
}

#[test]
fn test_grid_week_with_offset() {
    rcs()
        .args(["grid", "2025-01-01", "--view", "week", "--offset", "-1", "--no-color"])
        .args(["--config", &no_config("grid_week")])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-12-23 ~ 29"))
        .stdout(predicate::str::contains("12-30").not());
}

#[test]
fn test_lanes_lists_visible_events() {
    let events = sample_events_file("lanes");
    rcs()
        .args(["lanes", "2025-01-01", "--view", "week"])
        .args(["--config", &no_config("lanes"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lanes (2 in use)"))
        .stdout(predicate::str::contains("Order A"))
        .stdout(predicate::str::contains("Demo B"))
        .stdout(predicate::str::contains("Order C"))
        .stdout(predicate::str::contains("Demo D").not())
        .stdout(predicate::str::contains("Skipped record 5: missing date"));
}

#[test]
fn test_lanes_all_includes_hidden_events() {
    let events = sample_events_file("lanes_all");
    rcs()
        .args(["lanes", "2025-01-01", "--view", "week", "--all"])
        .args(["--config", &no_config("lanes_all"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo D"))
        .stdout(predicate::str::contains("2021-02-02"));
}

#[test]
fn test_show_week_renders_bars() {
    let events = sample_events_file("show_week");
    rcs()
        .args(["show", "2025-01-01", "--view", "week", "--no-color"])
        .args(["--config", &no_config("show_week"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-12-30 ~ 2025-01-05"))
        .stdout(predicate::str::contains("Order A"))
        .stdout(predicate::str::contains("Demo B (3 days)"))
        .stdout(predicate::str::contains("Order C"));
}

#[test]
fn test_show_month_marks_continued_segment() {
    let events = sample_events_file("show_month");
    rcs()
        .args(["show", "2021-01-15", "--view", "month", "--no-color"])
        .args(["--config", &no_config("show_month"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo D (4 days)"))
        .stdout(predicate::str::contains("◀Demo D (day 3/4)"));
}

#[test]
fn test_show_collapses_extra_lanes() {
    let json = r#"[
        {"id": 1, "kind": "demo", "demoStartDate": "2025-01-01", "demoEndDate": "2025-01-02"},
        {"id": 2, "kind": "demo", "demoStartDate": "2025-01-01", "demoEndDate": "2025-01-02"},
        {"id": 3, "kind": "demo", "demoStartDate": "2025-01-01", "demoEndDate": "2025-01-02"}
    ]"#;
    let events = write_file("show_more", "json", json);
    let config = write_file("show_more_conf", "conf", "max_visible_lanes: 2\n");

    rcs()
        .args(["show", "2025-01-01", "--view", "week", "--no-color"])
        .args(["--config", &config, "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("+1 more"))
        .stdout(predicate::str::contains("Demo #3").not());
}

#[test]
fn test_day_orders_demos_first() {
    let events = sample_events_file("day");
    let output = rcs()
        .args(["day", "2025-01-02"])
        .args(["--config", &no_config("day"), "--events", &events])
        .output()
        .expect("run day");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let demo = stdout.find("Demo B (day 2/3)").expect("demo listed");
    let order = stdout.find("Order C").expect("order listed");
    assert!(demo < order);
    assert!(!stdout.contains("Order A"));
}

#[test]
fn test_day_lists_demo_before_lower_id_order() {
    let events = sample_events_file("day_demo_first");
    let output = rcs()
        .args(["day", "2025-01-01"])
        .args(["--config", &no_config("day_demo_first"), "--events", &events])
        .output()
        .expect("run day");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let demo = stdout.find("Demo B (3 days)").expect("demo listed");
    let order = stdout.find("Order A").expect("order listed");
    assert!(demo < order);
}

#[test]
fn test_day_without_events() {
    let events = sample_events_file("day_empty");
    rcs()
        .args(["day", "2030-06-01"])
        .args(["--config", &no_config("day_empty"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events for 2030-06-01"));
}

#[test]
fn test_yaml_and_csv_sources() {
    let yaml = write_file(
        "src_yaml",
        "yaml",
        "- id: 1\n  kind: demo\n  title: Yaml demo\n  demoStartDate: 2025-01-01\n  demoEndDate: 2025-01-02\n",
    );
    rcs()
        .args(["lanes", "2025-01-01", "--view", "week"])
        .args(["--config", &no_config("src_yaml"), "--events", &yaml])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yaml demo"));

    let csv = write_file(
        "src_csv",
        "csv",
        "id,kind,title,installation_date\n1,order,Csv order,2025-01-03\n",
    );
    rcs()
        .args(["lanes", "2025-01-01", "--view", "week"])
        .args(["--config", &no_config("src_csv"), "--events", &csv])
        .assert()
        .success()
        .stdout(predicate::str::contains("Csv order"));
}

#[test]
fn test_bad_events_sources_fail() {
    rcs()
        .args(["lanes", "2025-01-01"])
        .args(["--config", &no_config("missing_src")])
        .args(["--events", &temp_path("does_not_exist", "json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read events file"));

    let txt = write_file("unsupported", "txt", "[]");
    rcs()
        .args(["lanes", "2025-01-01"])
        .args(["--config", &no_config("unsupported"), "--events", &txt])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input format"));

    let kind = write_file(
        "bad_kind",
        "json",
        r#"[{"id": 1, "kind": "meeting", "installationDate": "2025-01-01"}]"#,
    );
    rcs()
        .args(["lanes", "2025-01-01"])
        .args(["--config", &no_config("bad_kind"), "--events", &kind])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event kind: meeting"));
}

#[test]
fn test_config_check_and_migrate() {
    let config = write_file("migrate", "conf", "cell_width: 10\n");

    rcs()
        .args(["config", "--check", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("is missing"))
        .stdout(predicate::str::contains("lane_height"));

    rcs()
        .args(["config", "--migrate", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration migrated"));

    let content = fs::read_to_string(&config).expect("config written");
    assert!(content.contains("cell_width: 10"));
    assert!(content.contains("lane_height: 36"));
    assert!(content.contains("max_visible_lanes: 4"));

    rcs()
        .args(["config", "--check", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("is complete"));

    rcs()
        .args(["config", "--migrate", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn test_config_print_defaults_when_missing() {
    rcs()
        .args(["config", "--print", "--config", &no_config("print")])
        .assert()
        .success()
        .stdout(predicate::str::contains("effective defaults"))
        .stdout(predicate::str::contains("base_row_height: 120"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = write_file("invalid_conf", "conf", "cell_width: 2\n");
    rcs()
        .args(["span", "2025-01-01", "2025-01-01", "2025-01-01"])
        .args(["--config", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cell_width must be at least 4"));
}

#[test]
fn test_init_writes_default_config() {
    let config = temp_path("init", "conf");

    rcs()
        .args(["init", "--config", &config, "--test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test mode"));
    assert!(fs::metadata(&config).is_err());

    rcs()
        .args(["init", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file:"));

    let content = fs::read_to_string(&config).expect("config written");
    assert!(content.contains("base_row_height: 120"));
    assert!(content.contains("default_view: month"));
}

#[test]
fn test_lanes_filtered_by_kind() {
    let events = sample_events_file("filter_kind");
    rcs()
        .args(["lanes", "2025-01-01", "--view", "week", "--kind", "demo"])
        .args(["--config", &no_config("filter_kind"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lanes (1 in use)"))
        .stdout(predicate::str::contains("Demo B"))
        .stdout(predicate::str::contains("Order A").not())
        .stdout(predicate::str::contains("Order C").not());
}

#[test]
fn test_show_filtered_by_status() {
    let events = sample_events_file("filter_status");
    rcs()
        .args(["show", "2025-01-01", "--view", "week", "--no-color"])
        .args(["--status", "Approved"])
        .args(["--config", &no_config("filter_status"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order A"))
        .stdout(predicate::str::contains("Demo B").not())
        .stdout(predicate::str::contains("Order C").not());
}

#[test]
fn test_status_list_is_comma_separated() {
    let events = sample_events_file("filter_status_list");
    rcs()
        .args(["lanes", "2025-01-01", "--view", "week", "--status", "approved,unknown"])
        .args(["--config", &no_config("filter_status_list"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order A"))
        .stdout(predicate::str::contains("Demo B"))
        .stdout(predicate::str::contains("Order C"));
}

#[test]
fn test_day_filtered_by_search() {
    let events = sample_events_file("filter_search");
    rcs()
        .args(["day", "2025-01-02", "--search", "order c"])
        .args(["--config", &no_config("filter_search"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order C"))
        .stdout(predicate::str::contains("Demo B").not());

    rcs()
        .args(["day", "2025-01-02", "--search", "nothing like this"])
        .args(["--config", &no_config("filter_search"), "--events", &events])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events for 2025-01-02"));
}

#[test]
fn test_unknown_kind_flag_is_rejected() {
    rcs()
        .args(["lanes", "2025-01-01", "--kind", "meeting"])
        .args(["--config", &no_config("filter_bad_kind")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
