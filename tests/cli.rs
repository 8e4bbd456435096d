use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pwn() -> Command {
    Command::cargo_bin("pwn").unwrap()
}

#[test]
fn prints_ramp() {
    let out = pwn().args(["-1", "2", "level", "20", "colorP", "0.6,0.4,0.3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 29);
    assert_eq!(lines[9], "1.0000 1.0000 1.0000");
    assert_eq!(lines[28], "0.6000 0.4000 0.3000");
}

#[test]
fn css_format() {
    pwn().args(["--format", "css", "0", "1", "level", "2", "colorP", "1,0,0"])
        .assert()
        .success()
        .stdout("#ffffff\n#ff0000\n");
}

#[test]
fn writes_legend() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legend.html");
    pwn().arg(path.to_str().unwrap())
        .args(["-2", "2", "level", "4", "label", "off"])
        .assert()
        .success()
        .stdout("");
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<h3>off</h3>"));
    assert_eq!(html.matches("height: 30px").count(), 7);
}

#[test]
fn off_prints_instead_of_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legend.html");
    pwn().arg(path.to_str().unwrap())
        .args(["-2", "2", "level", "4", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000 1.0000 1.0000"));
    assert!(!path.exists());
}

#[test]
fn warns_on_reverse_override() {
    pwn().args(["-2", "2", "rev", "colorP", "0,1,0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("overrides “rev”"));
}

#[test]
fn rejects_bad_input() {
    pwn().args(["5", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
    pwn().args(["-1", "1", "level", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("level must be a positive integer"));
    pwn().args(["-1", "1", "shade", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option “shade”"));
}

#[test]
fn numeric_label() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legend.html");
    pwn().arg(path.to_str().unwrap())
        .args(["-2", "2", "level", "4", "label", "2024"])
        .assert()
        .success();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<h3>2024</h3>"));
}

#[test]
fn logs_with_default_filter() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("pwn.log");
    pwn().arg("--log").arg(&log)
        .env_remove("RUST_LOG")
        .args(["-1", "1", "level", "3"])
        .assert()
        .success();
    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("Starting pwn"));
    assert!(text.contains("ramp layout"));
}

#[test]
fn rejects_oversized_inputs() {
    pwn().args(["-1", "1", "level", "1e30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 65536"));
    pwn().args(["-1", "1", "log", "400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("log factor"));
}
