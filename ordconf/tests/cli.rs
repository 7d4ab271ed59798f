use std::path::Path;
use std::process::{Command, Output};

fn ordconf(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ordconf"))
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .env_remove("ORDCONF_PACKAGE")
        .env_remove("ORDCONF_CONFIGURABLE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ordconf")
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn writes_default_module_into_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = ordconf(dir.path(), &[]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let source = read(&dir.path().join("configuration.rs"));
    assert!(source.contains("use super::Item;"));
    assert!(source.contains("Fn(Item) -> Result<(), ConfigError>"));
    syn::parse_file(&source).unwrap();
}

#[test]
fn stdout_mode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = ordconf(dir.path(), &["--configurable", "Widget", "--stdout"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("use super::Widget;"));
    assert!(!dir.path().join("configuration.rs").exists());
}

#[test]
fn accepts_camel_case_pointer_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = ordconf(dir.path(), &["--configurable", "Widget", "--isPointer"]);

    assert!(output.status.success());
    let source = read(&dir.path().join("configuration.rs"));
    assert!(source.contains("Fn(&mut Widget) -> Result<(), ConfigError>"));
}

#[test]
fn invalid_package_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = ordconf(dir.path(), &["--package", "my-package"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid package name `my-package`"), "{stderr}");
    assert!(!dir.path().join("configuration.rs").exists());
}

#[test]
fn reads_project_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ordconf.toml"),
        "[generate]\nconfigurable = \"Engine\"\noutput_dir = \"src/engine\"\nfile_name = \"engine_config.rs\"\n",
    )
    .unwrap();

    let output = ordconf(dir.path(), &[]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let source = read(&dir.path().join("src/engine/engine_config.rs"));
    assert!(source.contains("use super::Engine;"));
}

#[test]
fn json_report_describes_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let first = ordconf(dir.path(), &["--output", "json", "--document"]);
    assert!(first.status.success());
    let report: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(report["configurable"], "Item");
    assert_eq!(report["document"], true);
    assert_eq!(report["written"], true);

    let second = ordconf(dir.path(), &["--output", "json", "--document"]);
    let report: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(report["written"], false);
}

#[test]
fn prelude_type_name_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = ordconf(dir.path(), &["--configurable", "Result", "--isPointer"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("configurable name `Result` collides with a generated item"), "{stderr}");
    assert!(!dir.path().join("configuration.rs").exists());
}

#[test]
fn field_name_collision_gets_distinct_binding() {
    let dir = tempfile::tempdir().unwrap();
    let output = ordconf(dir.path(), &["--configurable", "List", "--isPointer"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let source = read(&dir.path().join("configuration.rs"));
    assert!(source.contains("list_: List,"));
    syn::parse_file(&source).unwrap();
}
