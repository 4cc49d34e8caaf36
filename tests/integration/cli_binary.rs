//! End-to-end runs of the compiled binary. Only offline paths are exercised.

use std::process::Command;
use tempfile::TempDir;

fn console(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pgen-console"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PGEN_CONSOLE_ENV")
        .current_dir(home.path());
    cmd
}

#[test]
fn test_dry_run_prints_command() {
    let home = TempDir::new().unwrap();
    let output = console(&home)
        .args([
            "--quiet",
            "query",
            "--file",
            "data/all_hg38",
            "--sample",
            r#"IID=="S1""#,
            "--dry-run",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        r#"pgen-rs query --include -s 'IID=="S1"' -f 'IID + " " + SEX' data/all_hg38"#
    );
}

#[test]
fn test_invalid_server_url_exits_with_error() {
    let home = TempDir::new().unwrap();
    let output = console(&home)
        .args(["--quiet", "--server", "not-a-url", "config", "validate"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration"));
}

#[test]
fn test_workspace_config_changes_tool() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("config")).unwrap();
    std::fs::write(
        home.path().join("config/config.toml"),
        "[command]\ntool = \"pgen\"\n",
    )
    .unwrap();

    let output = console(&home)
        .args(["--quiet", "filter", "--file", "f", "--variant", "AF>0.1'", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "pgen filter f --include-var 'AF>0.1'");
}
