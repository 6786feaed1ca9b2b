//! End-to-end tests of the `pulseguard` binary. Nothing here leaves loopback.

use assert_cmd::Command;
use predicates::prelude::*;

fn pulseguard() -> Command {
    let mut cmd = Command::cargo_bin("pulseguard").unwrap();
    cmd.env_remove("PULSEGUARD_TOKEN");
    cmd
}

#[test]
fn help_lists_the_toolbox_commands() {
    pulseguard()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("scan")
                .and(predicate::str::contains("dns"))
                .and(predicate::str::contains("myip")),
        );
}

#[test]
fn missing_token_is_reported_before_anything_runs() {
    pulseguard()
        .args(["scan", "127.0.0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PULSEGUARD_TOKEN"));
}

#[test]
fn udp_scans_are_rejected_up_front() {
    pulseguard()
        .args(["scan", "127.0.0.1", "--protocol", "udp"])
        .env("PULSEGUARD_TOKEN", "test-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn unknown_scan_type_is_a_usage_error() {
    pulseguard()
        .args(["scan", "127.0.0.1", "--type", "deep"])
        .env("PULSEGUARD_TOKEN", "test-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scan type"));
}

#[test]
fn custom_loopback_scan_emits_ordered_json() {
    let assert = pulseguard()
        .args([
            "scan",
            "127.0.0.1",
            "--type",
            "custom",
            "--ports",
            "64002,64001",
            "--timeout",
            "1",
            "--output",
            "json",
        ])
        .env("PULSEGUARD_TOKEN", "test-token")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let ports = summary["ports"].as_array().unwrap();
    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0]["port"], 64002);
    assert_eq!(ports[1]["port"], 64001);

    let open = summary["open_ports"].as_u64().unwrap();
    let closed = summary["closed_ports"].as_u64().unwrap();
    let filtered = summary["filtered_ports"].as_u64().unwrap();
    assert_eq!(open + closed + filtered, 2);
}
