use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const VECTORS: &str = "\
[PRF=HMAC_SHA1]
[CTRLOCATION=BEFORE_FIXED]
[RLEN=32_BITS]

COUNT=0
L = 128
KI = aa
FixedInputData = bb
KO = cc

";

#[test]
fn test_dump_prints_suites_as_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vectors.rsp");
    fs::write(&path, VECTORS).unwrap();

    let output = Command::cargo_bin("gentest")
        .unwrap()
        .arg("dump")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["prf"], "HMAC_SHA1");
    assert_eq!(json[0]["ctr_location"], "BEFORE_FIXED");
    assert_eq!(json[0]["cases"][0]["key"], "aa");
    assert_eq!(json[0]["cases"][0]["iv"], "");
}

#[test]
fn test_generate_with_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prologue.in"), "// prologue\n").unwrap();
    fs::write(dir.path().join("vectors.rsp"), VECTORS).unwrap();
    let config = serde_json::json!({
        "prologue": "prologue.in",
        "output": "out.txt",
        "jobs": [{
            "vectors": "vectors.rsp",
            "ctr_location": "BEFORE_FIXED",
            "rlen": "32_BITS",
            "suite_template": "suite {prf}\n",
            "test_template": "test {index} {key} {expected}\n",
        }],
    });
    let config_path = dir.path().join("gentest.json");
    fs::write(&config_path, config.to_string()).unwrap();

    Command::cargo_bin("gentest")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "// prologue\nsuite HMAC_SHA1\ntest 0 aa cc\n"
    );

    // output override
    let other = dir.path().join("other.txt");
    Command::cargo_bin("gentest")
        .unwrap()
        .arg("-c")
        .arg(&config_path)
        .arg("generate")
        .arg("--output")
        .arg(&other)
        .assert()
        .success();
    assert!(other.exists());
}

#[test]
fn test_parse_error_exits_with_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.rsp");
    fs::write(&path, "[PRF=HMAC_SHA1]\n\nKI aa\n").unwrap();

    Command::cargo_bin("gentest")
        .unwrap()
        .arg("dump")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("broken.rsp"))
        .stderr(predicate::str::contains(
            "unexpected token `newline` at line 3, column 6 in case field '='",
        ));
}

#[test]
fn test_read_error_is_reported_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.rsp");
    fs::write(&path, b"[PRF=\xff]\n").unwrap();

    Command::cargo_bin("gentest")
        .unwrap()
        .arg("dump")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("failed to read input").count() == 1
        }));
}

#[test]
fn test_bad_template_is_rejected_before_writing() {
    let dir = tempdir().unwrap();
    let config = serde_json::json!({
        "prologue": "prologue.in",
        "output": "out.txt",
        "jobs": [{
            "vectors": "vectors.rsp",
            "suite_template": "{prf}",
            "test_template": "{nonce}",
        }],
    });
    let config_path = dir.path().join("gentest.json");
    fs::write(&config_path, config.to_string()).unwrap();

    Command::cargo_bin("gentest")
        .unwrap()
        .args(["generate", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonce"));
    assert!(!dir.path().join("out.txt").exists());
}
