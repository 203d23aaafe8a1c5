use std::process::Command;

#[test]
fn test_version_prints_package_version() {
    let bin = env!("CARGO_BIN_EXE_stdeploy");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("stdeploy {}", env!("CARGO_PKG_VERSION"))
    );
}
