//! Integration tests for the hook binary and the CLI entry point
//!
//! Every test points `CTIR_FOOTER_CONFIG` at a config in a temp directory so
//! the cache file and indicator command never touch the user's setup.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Write a config using `sh -c <script>` as the indicator command
fn write_config(dir: &Path, script: &str) -> PathBuf {
    let config = dir.join("footer.toml");
    let cache = dir.join("cache.json");
    let content = format!(
        "indicator_command = \"sh\"\nindicator_args = [\"-c\", {script:?}]\ncache_path = {cache:?}\n",
        script = script,
        cache = cache.display().to_string(),
    );
    std::fs::write(&config, content).expect("Failed to write config");
    config
}

fn spawn_hook(config: &Path) -> std::process::Child {
    Command::new(env!("CARGO_BIN_EXE_ctir-footer-hook"))
        .env("CTIR_FOOTER_CONFIG", config)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn ctir-footer-hook")
}

fn finish_hook(mut child: std::process::Child, input: &str) -> Output {
    {
        let mut stdin = child.stdin.take().expect("stdin is piped");
        stdin
            .write_all(input.as_bytes())
            .expect("Failed to write hook input");
    }
    child.wait_with_output().expect("Failed to wait for hook")
}

fn run_hook(config: &Path, input: &str) -> Output {
    finish_hook(spawn_hook(config), input)
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "hook failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {}", stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be one JSON object")
}

// =============================================================================
// Hook binary
// =============================================================================

#[test]
fn test_hook_reports_indicator_and_tool_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "echo '🎭 CTIR: Sonnet 4 (Anthropic)'");

    let output = run_hook(&config, r#"{"tool_name":"Bash","tool_result":{}}"#);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let value = stdout_json(&output);

    assert!(stdout.contains("ctir_model_indicator"));
    assert!(stdout.contains("timestamp"));
    assert!(stdout.contains(r#""tool_name":"Bash""#));
    assert_eq!(value["ctir_model_indicator"], "🎭 CTIR: Sonnet 4 (Anthropic)");
    assert!(value.get("error").is_none());

    // The fetch landed in the cache
    let cache: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("cache.json")).unwrap())
            .unwrap();
    assert_eq!(cache["indicator"], "🎭 CTIR: Sonnet 4 (Anthropic)");
    assert!(cache["timestamp"].is_f64());
}

#[test]
fn test_hook_diagnostics_stay_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "echo ok");

    let output = run_hook(&config, r#"{"tool_name":"Grep","tool_result":{}}"#);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("Tool used: Grep"), "stderr: {}", stderr);
    assert!(!stdout.contains("Tool used"));
}

#[test]
fn test_hook_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "echo ok");

    let output = run_hook(&config, "not json");
    let value = stdout_json(&output);

    assert_eq!(value["ctir_model_indicator"], "🎭 CTIR: Parse Error");
    assert!(value["error"].is_string());
    assert!(!dir.path().join("cache.json").exists());
}

#[test]
fn test_hook_serves_fresh_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "echo from-command");

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64();
    std::fs::write(
        dir.path().join("cache.json"),
        format!(r#"{{"indicator":"from-cache","timestamp":{}}}"#, now),
    )
    .unwrap();

    let value = stdout_json(&run_hook(&config, r#"{"tool_name":"Read"}"#));
    assert_eq!(value["ctir_model_indicator"], "from-cache");
}

#[test]
fn test_hook_degrades_when_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "exit 1");

    let value = stdout_json(&run_hook(&config, r#"{"tool_name":"Bash"}"#));
    assert_eq!(value["ctir_model_indicator"], "🎭 CTIR: Error (1)");
    assert_eq!(value["tool_name"], "Bash");
}

#[test]
fn test_hook_missing_script() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("footer.toml");
    std::fs::write(
        &config,
        format!(
            "indicator_command = \"/nonexistent/ctir-model-indicator.sh\"\ncache_path = {:?}\n",
            dir.path().join("cache.json").display().to_string()
        ),
    )
    .unwrap();

    let value = stdout_json(&run_hook(&config, r#"{"tool_name":"Bash"}"#));
    assert_eq!(value["ctir_model_indicator"], "🎭 CTIR: Script Not Found");
}

#[test]
fn test_concurrent_hooks_against_absent_cache() {
    let dir = tempfile::tempdir().unwrap();
    let calls = dir.path().join("calls.log");
    let script = format!(
        "echo call >> '{}'; sleep 0.5; echo '🎭 CTIR: Qwen3-480B'",
        calls.display()
    );
    let config = write_config(dir.path(), &script);

    let mut first = spawn_hook(&config);
    let mut second = spawn_hook(&config);

    // Hand both processes their input before waiting on either
    for (child, input) in [
        (&mut first, r#"{"tool_name":"Bash","tool_result":{}}"#),
        (&mut second, r#"{"tool_name":"Edit","tool_result":{}}"#),
    ] {
        let mut stdin = child.stdin.take().expect("stdin is piped");
        stdin
            .write_all(input.as_bytes())
            .expect("Failed to write hook input");
    }

    let a = first.wait_with_output().expect("Failed to wait for hook");
    let b = second.wait_with_output().expect("Failed to wait for hook");

    for (output, tool) in [(&a, "Bash"), (&b, "Edit")] {
        let value = stdout_json(output);
        assert_eq!(value["ctir_model_indicator"], "🎭 CTIR: Qwen3-480B");
        assert_eq!(value["tool_name"], tool);
    }

    // Neither saw the other's write, so both ran the command
    let log = std::fs::read_to_string(&calls).unwrap();
    assert_eq!(log.lines().count(), 2, "calls.log: {}", log);

    let cache: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("cache.json")).unwrap())
            .unwrap();
    assert_eq!(cache["indicator"], "🎭 CTIR: Qwen3-480B");
    assert!(!std::fs::read_dir(dir.path())
        .unwrap()
        .any(|e| e.unwrap().path().extension().is_some_and(|x| x == "tmp")));
}

// =============================================================================
// ctir-footer CLI
// =============================================================================

fn run_cli(args: &[&str], config: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ctir-footer"));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(config) = config {
        cmd.env("CTIR_FOOTER_CONFIG", config);
    }
    let output = cmd.output().expect("Failed to execute ctir-footer");
    assert!(
        output.status.success(),
        "ctir-footer {:?} failed with exit code {:?}. stderr: {}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn test_cli_without_subcommand_prints_usage() {
    let output = run_cli(&[], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: ctir-footer [demo|examples|status]"));
}

#[test]
fn test_cli_unknown_subcommand_prints_usage() {
    let output = run_cli(&["bogus"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: ctir-footer"));
}

#[test]
fn test_cli_examples() {
    let output = run_cli(&["examples"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CTIR Integration Examples"));
    assert!(stdout.contains("http://localhost:3001/model-indicator"));
}

#[test]
fn test_cli_status_uses_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "echo '🎭 CTIR: DeepCoder-14B'");

    let output = run_cli(&["status"], Some(&config));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "🎭 CTIR: DeepCoder-14B");
    assert!(dir.path().join("cache.json").exists());
}
