//! Integration tests for pluginlock

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Command isolated to a temp plugin dir and a config file that doesn't exist
    fn pluginlock(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("pluginlock");
        cmd.env_remove("PLUGINLOCK_CONFIG")
            .env_remove("PLUGINLOCK_PLUGIN_DIR")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--plugin-dir")
            .arg(plugin_dir(temp));
        cmd
    }

    fn plugin_dir(temp: &TempDir) -> PathBuf {
        temp.path().join("plugins")
    }

    fn write_plugin(temp: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn spec(name: &str, path: &Path) -> String {
        format!("{}={}", name, path.display())
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("pluginlock")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Plugin integrity lock manifest"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("pluginlock")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pluginlock"));
    }

    #[test]
    fn path_prints_manifest_location() {
        let temp = TempDir::new().unwrap();
        pluginlock(&temp)
            .arg("path")
            .assert()
            .success()
            .stdout(predicate::str::contains("providers.json"));
    }

    #[test]
    fn show_empty_without_manifest() {
        let temp = TempDir::new().unwrap();
        pluginlock(&temp)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("No plugins locked."));
    }

    #[test]
    fn lock_creates_manifest() {
        let temp = TempDir::new().unwrap();
        let plugin = write_plugin(&temp, "widget", b"abc");

        pluginlock(&temp)
            .args(["lock", &spec("acme/widget", &plugin)])
            .assert()
            .success()
            .stdout(predicate::str::contains("Locked 1 plugin(s)"));

        let raw = fs::read_to_string(plugin_dir(&temp).join("providers.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "acme/widget": "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
            })
        );
    }

    #[test]
    fn lock_replaces_unless_merge() {
        let temp = TempDir::new().unwrap();
        let a = write_plugin(&temp, "a", b"a");
        let b = write_plugin(&temp, "b", b"b");
        let c = write_plugin(&temp, "c", b"c");

        pluginlock(&temp).args(["lock", &spec("a", &a)]).assert().success();
        pluginlock(&temp).args(["lock", &spec("b", &b)]).assert().success();

        pluginlock(&temp)
            .args(["show", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("b "))
            .stdout(predicate::str::contains("a ").not());

        pluginlock(&temp)
            .args(["lock", "--merge", &spec("c", &c)])
            .assert()
            .success()
            .stdout(predicate::str::contains("Locked 2 plugin(s)"));
    }

    #[test]
    fn lock_invalid_spec() {
        let temp = TempDir::new().unwrap();
        pluginlock(&temp)
            .args(["lock", "no-equals-sign"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid plugin spec"));
    }

    #[test]
    fn verify_matching_plugin() {
        let temp = TempDir::new().unwrap();
        let plugin = write_plugin(&temp, "widget", b"widget v1");

        pluginlock(&temp).args(["lock", &spec("widget", &plugin)]).assert().success();

        pluginlock(&temp)
            .args(["verify", "widget"])
            .arg(&plugin)
            .assert()
            .success()
            .stdout(predicate::str::contains("matches locked digest"));
    }

    #[test]
    fn verify_modified_plugin_fails() {
        let temp = TempDir::new().unwrap();
        let plugin = write_plugin(&temp, "widget", b"widget v1");

        pluginlock(&temp).args(["lock", &spec("widget", &plugin)]).assert().success();
        fs::write(&plugin, b"widget v2").unwrap();

        pluginlock(&temp)
            .args(["verify", "widget"])
            .arg(&plugin)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Digest mismatch for widget"));
    }

    #[test]
    fn verify_unlocked_plugin_fails() {
        let temp = TempDir::new().unwrap();
        let plugin = write_plugin(&temp, "widget", b"widget v1");

        pluginlock(&temp)
            .args(["verify", "widget"])
            .arg(&plugin)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Plugin not locked: widget"));
    }

    #[test]
    fn verify_corrupt_manifest_trusts_nothing() {
        let temp = TempDir::new().unwrap();
        let plugin = write_plugin(&temp, "widget", b"widget v1");
        fs::create_dir_all(plugin_dir(&temp)).unwrap();
        fs::write(plugin_dir(&temp).join("providers.json"), "{ not json").unwrap();

        pluginlock(&temp)
            .args(["verify", "widget"])
            .arg(&plugin)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Plugin not locked"));
    }

    #[test]
    fn remove_locked_plugin() {
        let temp = TempDir::new().unwrap();
        let plugin = write_plugin(&temp, "widget", b"abc");

        pluginlock(&temp).args(["lock", &spec("widget", &plugin)]).assert().success();
        pluginlock(&temp).args(["remove", "widget"]).assert().success();

        pluginlock(&temp)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("No plugins locked."));
    }

    #[test]
    fn remove_missing_plugin_fails() {
        let temp = TempDir::new().unwrap();
        pluginlock(&temp)
            .args(["remove", "nonexistent"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Plugin not locked: nonexistent"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        pluginlock(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[plugins]"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        pluginlock(&temp).args(["config", "init"]).assert().success();
        assert!(temp.path().join("config.toml").exists());
    }
}
