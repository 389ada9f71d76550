use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary in `dir` with `stdin` piped in.
fn run_paintcalc(dir: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_paintcalc"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start paintcalc");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().expect("Failed to wait for paintcalc")
}

#[test]
fn test_interactive_estimate() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_paintcalc(&temp_dir, &[], "4\n3\nn\nn\n1\nauto\n");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("How large is wall #1?"));
    assert!(stdout.contains("1 - Foo Green"));
    assert!(stdout.contains(
        "To cover 12.00 square meters of wall, you will require 2.00 litres of paint."
    ));
    assert!(stdout.contains("You will need 2×1.0L cans."));
}

#[test]
fn test_estimate_with_presets() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_paintcalc(
        &temp_dir,
        &["estimate", "--paint", "1", "--size", "5"],
        "4\n3\nn\nn\n",
    );

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Please select a paint:"));
    assert!(stdout.contains("You will need 1×5.0L can."));
}

#[test]
fn test_closed_input_exits_with_distinct_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_paintcalc(&temp_dir, &[], "4\n");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Input stream closed"));
}

#[test]
fn test_unpackable_volume_exits_with_distinct_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_paintcalc(&temp_dir, &[], "4e8\n4e8\nn\nn\n1\nauto\n");

    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("You will need"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("the volume is out of range"));
}

#[test]
fn test_init_command() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_paintcalc(&temp_dir, &["init"], "");

    assert!(output.status.success());

    let config_path = temp_dir.path().join(".paintcalc/settings.toml");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[[catalog]]"));
    assert!(content.contains("Baz Beige"));

    // A second init without --force refuses to overwrite
    let output = run_paintcalc(&temp_dir, &["init"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("paintcalc init --force"));
    let output = run_paintcalc(&temp_dir, &["init", "--force"], "");
    assert!(output.status.success());
}

#[test]
fn test_workspace_catalog_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".paintcalc");
    std::fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
version = 2

[[catalog]]
name = "Trade White"
coverage = 10.0
sizes = [2.5, 10.0]
"#;
    std::fs::write(config_dir.join("settings.toml"), config_content).unwrap();

    let output = run_paintcalc(&temp_dir, &["config"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version = 2"));
    assert!(stdout.contains("Trade White"));

    let output = run_paintcalc(&temp_dir, &["catalog"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Trade White"));
    assert!(!stdout.contains("Foo Green"));

    // 5m x 6m = 30m² at 10m²/L = 3L -> 5L aligned -> 2 x 2.5L
    let output = run_paintcalc(&temp_dir, &[], "5\n6\nn\nn\n1\nauto\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("You will need 2×2.5L cans."));
}

#[test]
fn test_invalid_catalog_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "catalog = []\n").unwrap();

    let output = run_paintcalc(
        &temp_dir,
        &["--config", config_path.to_str().unwrap(), "catalog"],
        "",
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Paint catalog is empty"));
}
