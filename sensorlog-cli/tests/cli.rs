//! Runs the built `sensorlog` binary against temporary log files

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::{Builder, NamedTempFile};

const TEXT_LOG: &str = "reference 70.0 45.0 6
thermometer temp-1
2007-04-05T22:00 70.1
2007-04-05T22:01 69.9
humidity hum-1
2007-04-05T22:04 45.2
2007-04-05T22:05 47.3
monoxide mon-1
2007-04-05T22:04 6
";

fn log_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn sensorlog(args: &[&str], path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sensorlog"))
        .args(args)
        .arg(path)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn evaluates_text_log() {
    let file = log_file(".txt", TEXT_LOG);
    let output = sensorlog(&["evaluate"], file.path());
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"temp-1": "ultra precise", "hum-1": "discard", "mon-1": "keep"})
    );
}

#[test]
fn format_flag_overrides_extension() {
    let file = log_file(".log", TEXT_LOG);
    let output = sensorlog(&["evaluate", "--format", "txt", "--pretty"], file.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\n  \"hum-1\": \"discard\""));
}

#[test]
fn uppercase_extension_is_accepted() {
    let document = json!({
        "reference": {"temperature": 70, "humidity": 45, "monoxide": 6},
        "sensors": [{"type": "humidity", "name": "hum-7", "readings": [{"timestamp": "2024-01-01T00:00", "value": 45.5}]}]
    });
    let file = log_file(".JSON", &document.to_string());
    let output = sensorlog(&["evaluate"], file.path());
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"hum-7": "keep"}));
}

#[test]
fn unsupported_extension_fails() {
    let file = log_file(".xml", TEXT_LOG);
    let output = sensorlog(&["evaluate"], file.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "Unsupported file type");
}

#[test]
fn library_errors_are_printed_verbatim() {
    let file = log_file(".txt", "random data");
    let output = sensorlog(&["evaluate"], file.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "Invalid text format");
}

#[test]
fn diagnostics_and_policy() {
    let file = log_file(".txt", "reference 70 45 6\nhumidity hum-1\n2024-01-01T00:00 46.5\nmonoxide mon-1\n");
    let policy = log_file(".json", r#"{"humidity_threshold": 2.0}"#);
    let policy_path = policy.path().to_str().unwrap();

    let output = sensorlog(&["evaluate", "--diagnostics", "--policy", policy_path], file.path());
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["results"], json!({"hum-1": "keep"}));
    assert_eq!(report["diagnostics"][0]["kind"], "empty_sensor");
    assert_eq!(report["diagnostics"][0]["line"], 4);

    let output = sensorlog(&["evaluate", "--preset", "strict"], file.path());
    assert_eq!(stdout_json(&output), json!({"hum-1": "discard"}));
}

#[test]
fn validate_subcommand() {
    let good = log_file(".txt", TEXT_LOG);
    let output = sensorlog(&["validate"], good.path());
    assert!(output.status.success());

    let bad = log_file(".json", r#"{"reference": {"temperature": 70}}"#);
    let output = sensorlog(&["validate"], bad.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "Invalid JSON format");
}

#[test]
fn missing_file_reports_path() {
    let output = sensorlog(&["evaluate"], Path::new("/nonexistent/readings.txt"));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("cannot read '/nonexistent/readings.txt'"));
}

#[test]
fn documented_usage_forms() {
    let file = log_file(".txt", TEXT_LOG);
    let output = sensorlog(&["--verbose", "evaluate", "--preset", "lenient", "--pretty"], file.path());
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["hum-1"], "keep");

    let output = sensorlog(&["-v", "validate"], file.path());
    assert!(output.status.success());

    let policy = log_file(".json", "{}");
    let policy_path = policy.path().to_str().unwrap();
    let output = sensorlog(&["evaluate", "--policy", policy_path, "--preset", "strict"], file.path());
    assert_eq!(output.status.code(), Some(2));
}
