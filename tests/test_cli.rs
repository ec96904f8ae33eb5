use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_gen_prints_password_and_strength() {
    Command::cargo_bin("passmith")
        .unwrap()
        .args(["gen", "--length", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated password:"))
        .stdout(predicate::str::contains("Strength:"));
}

#[test]
fn test_gen_with_all_classes_excluded_fails() {
    Command::cargo_bin("passmith")
        .unwrap()
        .args([
            "gen",
            "--no-uppercase",
            "--no-lowercase",
            "--no-numbers",
            "--no-symbols",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character class"));
}

#[test]
fn test_gen_rejects_out_of_range_length() {
    Command::cargo_bin("passmith")
        .unwrap()
        .args(["gen", "--length", "3"])
        .assert()
        .failure();

    Command::cargo_bin("passmith")
        .unwrap()
        .args(["gen", "--length", "65"])
        .assert()
        .failure();
}

#[test]
fn test_score_reports_known_vector() {
    Command::cargo_bin("passmith")
        .unwrap()
        .args(["score", "Ab3$Ab3$Ab3$Ab3$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("very strong"));
}

#[test]
fn test_gen_json_output_is_parseable() {
    let out = Command::cargo_bin("passmith")
        .unwrap()
        .args(["gen", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["password"].as_str().unwrap().chars().count(), 16);
    assert_eq!(v["length"].as_u64().unwrap(), 16);
    let level = v["level"].as_u64().unwrap();
    assert!((1..=4).contains(&level));
}
