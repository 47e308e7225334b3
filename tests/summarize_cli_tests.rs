mod common;

use common::{run_recap, TestEnv};

#[test]
fn summarize_subcommand_is_available() {
    let output = run_recap(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_reports_missing_transcript() {
    let output = run_recap(&["summarize", "does-not-exist.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "summarize should fail for a missing file\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("Failed to read transcript"),
        "expected missing transcript error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_without_api_key_writes_nothing() {
    let env = TestEnv::new();
    env.write_file("talk.txt", "Today we cover ownership. Then borrowing.");

    let output = env.run(&["summarize", "talk.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("API key is missing"),
        "expected missing credential error, got:\n{}",
        stderr
    );
    assert!(!env.work_dir().join("summary.md").exists());
}

#[test]
fn summarize_rejects_unknown_model() {
    let env = TestEnv::new();
    env.write_file("talk.txt", "Today we cover ownership.");

    let output = env.run(&["summarize", "talk.txt", "--model", "gpt-1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unknown model 'gpt-1'"));
    assert!(!env.work_dir().join("summary.md").exists());
}

#[test]
fn summarize_rejects_unknown_provider() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[llm]
provider = "carrier-pigeon"
api_key = "test"
"#,
    );
    env.write_file("talk.txt", "Today we cover ownership.");

    let output = env.run(&["summarize", "talk.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unsupported llm.provider 'carrier-pigeon'"));
}

#[test]
fn title_subcommand_is_available() {
    let output = run_recap(&["title", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--head"));
}

#[test]
fn title_without_api_key_fails() {
    let env = TestEnv::new();
    env.write_file("talk.txt", "Today we cover ownership.");

    let output = env.run(&["title", "talk.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("API key is missing"));
}
