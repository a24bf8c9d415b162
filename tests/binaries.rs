use std::path::Path;
use std::process::{Command, Output};

use test_case::test_case;

fn run(bin: &str, settings: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .arg("-p")
        .arg(settings)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn window_create_from_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let output = run(
        env!("CARGO_BIN_EXE_vyn-call"),
        &settings,
        &["Window.Create", "Main", "800", "600"],
    );
    assert_eq!(
        stdout(&output),
        "Window Created: Main (800x600)\nWindow created successfully!\n"
    );
    assert!(!settings.exists());
}

#[test]
fn bad_argument_fails() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let output = run(env!("CARGO_BIN_EXE_vyn-call"), &settings, &["Window.Create", "Main", "wide"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "vyn-call: bad argument #2 to 'Create' (number expected, got string)\n"
    );
}

#[test]
fn stored_settings_reach_vyn_call() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let output = run(
        env!("CARGO_BIN_EXE_config-store"),
        &settings,
        &["set", "-k", "stdlib.window.module", "-v", "s:Gui"],
    );
    stdout(&output);

    let output = run(env!("CARGO_BIN_EXE_vyn-call"), &settings, &["--list"]);
    assert_eq!(stdout(&output), "Gui.Create\n");
}

#[test_case(&[] ; "block")]
#[test_case(&["--function"] ; "function")]
fn debug_logging_keeps_stdout_clean(extra: &[&str]) {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let mut args = vec!["--debug"];
    args.extend_from_slice(extra);

    let output = run(env!("CARGO_BIN_EXE_scope-demo"), &settings, &args);
    assert_eq!(stdout(&output), "Inside block: 50\nFinal score: 50\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("finished with score 50"));
}

#[test]
fn stored_debug_setting_enables_logging() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let output = run(
        env!("CARGO_BIN_EXE_config-store"),
        &settings,
        &["set", "-k", "log.debug", "-v", "b:true"],
    );
    stdout(&output);

    let output = run(env!("CARGO_BIN_EXE_scope-demo"), &settings, &[]);
    assert_eq!(stdout(&output), "Inside block: 50\nFinal score: 50\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("DEBUG"));
}
