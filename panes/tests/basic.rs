use std::process::Command;

#[test]
fn help_lists_both_demos() {
    let exe = env!("CARGO_BIN_EXE_panes");
    let output = Command::new(exe).arg("--help").output().expect("run panes");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scrollable"));
    assert!(stdout.contains("figure"));
}

#[test]
fn figure_export_writes_png_without_window() {
    let exe = env!("CARGO_BIN_EXE_panes");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("identity.png");
    let status = Command::new(exe)
        .args(["figure", "--no-axes", "--export"])
        .arg(&path)
        .status()
        .expect("run panes figure");
    assert!(status.success());
    let data = std::fs::read(&path).expect("read export");
    assert!(data.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn figure_export_uses_configured_size() {
    let exe = env!("CARGO_BIN_EXE_panes");
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("panes.toml");
    std::fs::write(&config, "[figure]\nwidth = 123.0\nheight = 45.0\n").expect("write config");
    let path = dir.path().join("identity.svg");
    let status = Command::new(exe)
        .arg("--config")
        .arg(&config)
        .args(["figure", "--no-axes", "--export"])
        .arg(&path)
        .status()
        .expect("run panes figure");
    assert!(status.success());
    let svg = std::fs::read_to_string(&path).expect("read export");
    assert!(svg.contains("width=\"123\""));
    assert!(svg.contains("height=\"45\""));
}

#[test]
fn missing_config_fails_before_any_window() {
    let exe = env!("CARGO_BIN_EXE_panes");
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(exe)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("scrollable")
        .output()
        .expect("run panes");
    assert!(!output.status.success());
}
