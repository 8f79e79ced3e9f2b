use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn missing_image_fails_before_any_output() {
    Command::cargo_bin("vision-label")
        .unwrap()
        .arg("definitely/not/here.jpg")
        .env_remove("VISION_API_KEY")
        .env_remove("GOOGLE_OAUTH_ACCESS_TOKEN")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("vision-label-no-config"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read image"));
}

#[test]
fn image_argument_is_required() {
    Command::cargo_bin("vision-label")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<IMAGE_FILE>"));
}

#[test]
fn prints_version() {
    Command::cargo_bin("vision-label")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vision-label "));
}
