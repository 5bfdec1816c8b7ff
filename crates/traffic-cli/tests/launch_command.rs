use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn get_traffic_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("traffic")
}

/// Stand-in for Chrome that records its arguments next to itself and exits
#[cfg(unix)]
fn fake_chrome(dir: &Path) -> PathBuf {
    fake_chrome_running_for(dir, 0)
}

/// Like [`fake_chrome`], but stays alive for `seconds` after recording
#[cfg(unix)]
fn fake_chrome_running_for(dir: &Path, seconds: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-chrome");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$0.args\"\nexec sleep {}\n",
        seconds
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
fn recorded_args(chrome: &Path) -> Vec<String> {
    let recorded = chrome.with_extension("args");
    std::fs::read_to_string(recorded)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_help_lists_launch_flags() {
    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Open a URL in a titled Chrome app window"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("http://www.google.com"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--chrome-path"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--temp"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_missing_chrome_fails() {
    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--chrome-path").arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}

#[test]
fn test_chrome_path_from_env() {
    let mut cmd = Command::new(get_traffic_bin());
    cmd.env("TRAFFIC_CHROME_PATH", "/nonexistent/env-chrome")
        .arg("--url")
        .arg("https://example.com");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/env-chrome"));
}

#[test]
fn test_url_flag_requires_value() {
    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--url");

    cmd.assert().failure();
}

#[cfg(unix)]
#[test]
fn test_launch_without_arguments_opens_default_url() {
    let dir = tempfile::tempdir().unwrap();
    let chrome = fake_chrome(dir.path());

    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--chrome-path").arg(&chrome);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loading http://www.google.com"));

    let args = recorded_args(&chrome);
    assert!(args.contains(&"--app=http://www.google.com".to_string()));
    assert!(args.contains(&"--remote-debugging-port=9222".to_string()));
}

#[cfg(unix)]
#[test]
fn test_launch_with_url() {
    let dir = tempfile::tempdir().unwrap();
    let chrome = fake_chrome(dir.path());

    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--chrome-path")
        .arg(&chrome)
        .arg("--url")
        .arg("https://example.com")
        .arg("--port")
        .arg("9444");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loading https://example.com"));

    let args = recorded_args(&chrome);
    assert!(args.contains(&"--app=https://example.com".to_string()));
    assert!(args.contains(&"--remote-debugging-port=9444".to_string()));
}

#[cfg(unix)]
#[test]
fn test_launch_with_empty_url_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let chrome = fake_chrome(dir.path());

    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--chrome-path").arg(&chrome).arg("--url=");

    cmd.assert().success();

    let args = recorded_args(&chrome);
    assert!(args.contains(&"--app=http://www.google.com".to_string()));
}

#[cfg(unix)]
#[test]
fn test_launch_with_title_survives_missing_devtools() {
    let dir = tempfile::tempdir().unwrap();
    let chrome = fake_chrome_running_for(dir.path(), 5);

    // The fake browser stays up but never opens a DevTools port, so applying
    // the title fails; that is logged and the launch still succeeds
    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--chrome-path")
        .arg(&chrome)
        .arg("--title")
        .arg("Example")
        .arg("--port")
        .arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Could not update the Chrome window"));

    let args = recorded_args(&chrome);
    assert!(args.contains(&"--app=http://www.google.com".to_string()));
}

#[cfg(unix)]
#[test]
fn test_ctrl_c_while_presenting_cleans_up() {
    use std::time::{Duration, Instant};

    let dir = tempfile::tempdir().unwrap();
    let chrome = fake_chrome_running_for(dir.path(), 30);

    // Port 1 keeps the title update retrying while the signal arrives
    let mut traffic = std::process::Command::new(get_traffic_bin())
        .arg("--chrome-path")
        .arg(&chrome)
        .arg("--title")
        .arg("Example")
        .arg("--port")
        .arg("1")
        .stdout(std::process::Stdio::null())
        .spawn()
        .unwrap();

    let recorded = chrome.with_extension("args");
    let deadline = Instant::now() + Duration::from_secs(10);
    while !recorded.exists() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(50));
    }
    std::thread::sleep(Duration::from_millis(300));

    std::process::Command::new("kill")
        .arg("-INT")
        .arg(traffic.id().to_string())
        .status()
        .unwrap();

    let started = Instant::now();
    let status = traffic.wait().unwrap();
    assert!(status.success());
    assert!(started.elapsed() < Duration::from_secs(10));

    let profile = recorded_args(&chrome)
        .into_iter()
        .find_map(|arg| arg.strip_prefix("--user-data-dir=").map(PathBuf::from))
        .unwrap();
    assert!(!profile.exists());
}

#[cfg(unix)]
#[test]
fn test_profile_name_cannot_escape_profiles_dir() {
    let dir = tempfile::tempdir().unwrap();
    let chrome = fake_chrome(dir.path());

    let mut cmd = Command::new(get_traffic_bin());
    cmd.arg("--chrome-path")
        .arg(&chrome)
        .arg("--profile")
        .arg("../escape");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid profile name"));

    assert!(!chrome.with_extension("args").exists());
}
