//! Startup guard tests.
//!
//! These run the real binary so the check is observed where it matters: a
//! missing API_KEY must abort the process before it ever listens.

use std::process::{Command, Stdio};
use std::time::Duration;

fn greeter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_greeter"))
}

#[test]
fn test_missing_api_key_aborts_startup() {
    let output = greeter_cmd()
        .env_remove("API_KEY")
        .env_remove("GREETER_CONFIG")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_empty_api_key_aborts_startup() {
    let output = greeter_cmd()
        .env("API_KEY", "")
        .env_remove("GREETER_CONFIG")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_present_api_key_reaches_listening_state() {
    // Ephemeral port via config file so the test never collides with a
    // real deployment port.
    let config_path = std::env::temp_dir().join("greeter-startup-ok.toml");
    std::fs::write(&config_path, "[listener]\nbind_address = \"127.0.0.1:0\"\n").unwrap();

    let mut child = greeter_cmd()
        .env("API_KEY", "secret")
        .env("GREETER_CONFIG", &config_path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    std::thread::sleep(Duration::from_millis(700));
    assert!(
        child.try_wait().unwrap().is_none(),
        "Process should still be serving"
    );

    child.kill().unwrap();
    let _ = child.wait();
}

#[test]
fn test_unreadable_config_aborts_startup() {
    let output = greeter_cmd()
        .env("API_KEY", "secret")
        .env("GREETER_CONFIG", "/nonexistent/greeter.toml")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
