use cli::{run, Cli, Settings};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

const DESIRED: &str = r#"
alerts:
  - alertName: replication-lag
    enabled: true
    metricThreshold:
      metricName: OPLOG_REPLICATION_LAG_TIME
      operator: GREATER_THAN
      threshold: 60
      units: SECONDS
    notifications:
      - notificationType: GROUP
        delayMin: 0
        intervalMin: 60
  - alertName: connections
    enabled: true
    metricThreshold:
      metricName: CONNECTIONS
      operator: GREATER_THAN
      threshold: 500
      units: RAW
    notifications: []
"#;

const CURRENT: &str = r#"{"results": [
    {
        "id": "000000000000000000000001",
        "alertName": "replication-lag",
        "enabled": true,
        "metricThreshold": {"metricName": "OPLOG_REPLICATION_LAG_TIME", "operator": "GREATER_THAN", "threshold": 30, "units": "SECONDS"},
        "notifications": [{"notificationType": "GROUP", "delayMin": 0, "intervalMin": 60}]
    },
    {
        "id": "000000000000000000000002",
        "alertName": "legacy-asserts",
        "enabled": true,
        "metricThreshold": {"metricName": "ASSERTS_REGULAR", "operator": "GREATER_THAN", "threshold": 10, "units": "RAW"},
        "notifications": []
    }
]}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn cli_for(desired: &NamedTempFile, current: &NamedTempFile, extra: &[&str]) -> Cli {
    let mut args = vec![
        "alertsync".to_string(),
        "--desired-config".to_string(),
        desired.path().display().to_string(),
        "--current-config".to_string(),
        current.path().display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_plan_and_summary() {
    let desired = write_temp(DESIRED);
    let current = write_temp(CURRENT);
    let cli = cli_for(&desired, &current, &["--seed", "7"]);

    let report = run(&cli, &Settings::default()).unwrap();
    assert_eq!(report.summary.to_string(), "Created:1,Deleted:1,Updated:1");

    let actions: serde_json::Value = serde_json::from_str(&report.plan).unwrap();
    let actions = actions.as_array().unwrap();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0]["action"], "create");
    assert_eq!(actions[0]["body"]["alertName"], "connections");
    assert_eq!(actions[1]["action"], "update");
    assert_eq!(actions[1]["alertID"], "000000000000000000000001");
    assert_eq!(actions[2]["action"], "delete");
    assert_eq!(actions[2]["alertID"], "000000000000000000000002");

    assert!(report
        .to_string()
        .ends_with("Summary: {Created:1,Deleted:1,Updated:1}"));
}

#[test]
fn test_seed_makes_plan_reproducible() {
    let desired = write_temp(DESIRED);
    let current = write_temp(r#"{"results": []}"#);
    let cli = cli_for(&desired, &current, &["--seed", "42"]);

    let first = run(&cli, &Settings::default()).unwrap();
    let second = run(&cli, &Settings::default()).unwrap();
    assert_eq!(first.plan, second.plan);
    assert_eq!(first.summary.created, 2);
}

#[test]
fn test_strict_names_rejects_duplicates() {
    let duplicated = format!(
        "{}{}",
        DESIRED,
        r#"  - alertName: connections
    enabled: false
"#
    );
    let desired = write_temp(&duplicated);
    let current = write_temp(CURRENT);
    let cli = cli_for(&desired, &current, &["--strict-names"]);

    let settings = cli.settings().unwrap();
    let err = run(&cli, &settings).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate alert name 'connections'"));
}

#[test]
fn test_unreadable_current_config() {
    let desired = write_temp(DESIRED);
    let current = write_temp("not json");
    let cli = cli_for(&desired, &current, &[]);

    let err = run(&cli, &Settings::default()).unwrap_err();
    assert!(err.to_string().contains("current-config"));
}
