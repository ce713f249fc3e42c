use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn shelfwise(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelfwise").unwrap();
    cmd.env("SHELFWISE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn run_ok(home: &Path, args: &[&str]) {
    shelfwise(home).args(args).assert().success();
}

#[test]
fn test_build_hierarchy_tag_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelfwise(home)
        .args(["aw", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added warehouse \"Home\" with ID 1"));
    run_ok(home, &["switch", "Home"]);
    run_ok(home, &["add-room", "Kitchen"]);
    run_ok(home, &["add-shelf", "Pantry", "Kitchen"]);
    shelfwise(home)
        .args(["ab", "Crate", "Pantry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added box \"Crate\" with ID 4 to shelf \"Pantry\""));

    shelfwise(home)
        .args(["list", "box"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crate"))
        .stdout(predicate::str::contains("Pantry"))
        .stdout(predicate::str::contains("Home*"));

    shelfwise(home)
        .args(["tag", "fragile", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added tag \"fragile\" to Box \"Crate\""));
    shelfwise(home)
        .args(["at", "fragile", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already tagged"));

    shelfwise(home)
        .args(["show", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crate"))
        .stdout(predicate::str::contains("fragile"));

    shelfwise(home)
        .args(["rm", "4", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Box \"Crate\" deleted"));

    shelfwise(home)
        .args(["show", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with ID 4 found."));

    // deleted boxes keep counting towards their tags
    shelfwise(home)
        .args(["list", "tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fragile"))
        .stdout(predicate::str::contains("1"));
}

#[test]
fn test_room_requires_active_warehouse() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    run_ok(home, &["add-warehouse", "Home"]);

    shelfwise(home)
        .args(["ar", "Kitchen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Switch to a valid warehouse first"));
}

#[test]
fn test_unknown_names_fail() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    run_ok(home, &["aw", "Home"]);
    run_ok(home, &["sww", "Home"]);

    shelfwise(home)
        .args(["as", "Top", "Cellar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No room with name/ID \"Cellar\" found."));

    shelfwise(home)
        .args(["sww", "home"])
        .assert()
        .failure();
}

#[test]
fn test_delete_without_yes_reads_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    run_ok(home, &["ac", "Tools"]);

    shelfwise(home)
        .args(["delete", "Tools", "--kind", "category"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));

    shelfwise(home)
        .args(["delete", "Tools", "-k", "c"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category \"Tools\" deleted"));
}

#[test]
fn test_edit_with_untouched_buffer_changes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    run_ok(home, &["ac", "Tools"]);

    shelfwise(home)
        .env("EDITOR", "true")
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category \"Tools\" not changed"));
}

#[test]
fn test_path_points_into_home() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let expected = home.join("inventory.json");

    shelfwise(home)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_changes_data_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelfwise(home)
        .args(["config", "data-file", "garage.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to garage.json"));
    shelfwise(home)
        .args(["config", "data-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("garage.json"));

    run_ok(home, &["aw", "Garage"]);
    assert!(home.join("garage.json").exists());
    assert!(!home.join("inventory.json").exists());
}

#[test]
fn test_config_rejects_unknown_key_and_blank_tag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    shelfwise(home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
    assert!(!home.join("config.json").exists());

    run_ok(home, &["ac", "Tools"]);
    for _ in 0..2 {
        shelfwise(home)
            .args(["tag", "", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Tag names cannot be empty"));
    }
    shelfwise(home)
        .args(["list", "tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unnamed").not());
}

#[test]
fn test_corrupt_data_file_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    std::fs::write(home.join("inventory.json"), "{ not json").unwrap();

    shelfwise(home)
        .args(["list", "item"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is corrupted"));
    assert_eq!(
        std::fs::read_to_string(home.join("inventory.json")).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_find_lists_matching_items() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let doc = r#"{
      "currentWarehouseid": 0,
      "items": [
        {"id": 7, "name": "Hammer", "description": "claw", "created": 0, "updated": 0,
         "deleted": false, "tags": null, "data": {"location": "", "amount": 1, "boxId": 0}},
        {"id": 8, "name": "Saw", "description": "", "created": 0, "updated": 0,
         "deleted": false, "tags": [], "data": {"location": "wall", "amount": 1}}
      ]
    }"#;
    std::fs::write(home.join("inventory.json"), doc).unwrap();

    shelfwise(home)
        .args(["find", "CLAW"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hammer"))
        .stdout(predicate::str::contains("Saw").not());

    // the ID counter continues after the highest stored ID
    shelfwise(home)
        .args(["aw", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with ID 9"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("shelfwise")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
