use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dnasim"))
}

/// Command isolated from the caller's config and database.
fn dnasim(home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("DNASIM_CONFIG")
        .env_remove("DNASIM_DATABASE")
        .env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("dnasim should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn write_config(home: &Path, contents: &str) {
    let dir = home.join("config").join("dnasim");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), contents).expect("write config");
}

#[test]
fn test_encode_default_mapping() {
    let home = tempfile::tempdir().unwrap();
    let output = run(dnasim(home.path()).args(["encode", "Hi"]));

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Binary:   01001000 01101001"));
    assert!(text.contains("Sequence: CAGACGGC"));
    assert!(text.contains("Length:   8 bp (2 chars, 16 bits)"));
    assert!(text.contains("Status:   ACTIVE"));
}

#[test]
fn test_encode_quiet_prints_bases_only() {
    let home = tempfile::tempdir().unwrap();
    let output = run(dnasim(home.path()).args(["encode", "Hi", "--quiet", "--mapping", "A=11,C=10,G=01,T=00"]));

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "GTCTGCCG");
}

#[test]
fn test_encode_json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = run(dnasim(home.path()).args(["encode", "A", "--json"]));

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["bases"], "CAAC");
    assert_eq!(value["summary"]["basePairs"], 4);
}

#[test]
fn test_encode_invalid_mapping_reports_each_base() {
    let home = tempfile::tempdir().unwrap();
    let output = run(dnasim(home.path()).args(["encode", "Hi", "--mapping", "A=00,C=00,G=1"]));

    assert_eq!(output.status.code(), Some(4));
    assert!(stdout(&output).contains("Status:   ERROR"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("A: Duplicate binary value"));
    assert!(stderr.contains("C: Duplicate binary value"));
    assert!(stderr.contains("G: Must be 2 bits"));
}

#[test]
fn test_binary_and_decode() {
    let home = tempfile::tempdir().unwrap();

    let output = run(dnasim(home.path()).args(["binary", "Hi"]));
    assert_eq!(stdout(&output).trim_end(), "01001000 01101001");

    let output = run(dnasim(home.path()).args(["decode", "0100100001"]));
    assert_eq!(stdout(&output).trim_end(), "H");
}

#[test]
fn test_decode_reads_stdin() {
    let home = tempfile::tempdir().unwrap();
    let mut child = dnasim(home.path())
        .arg("decode")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn dnasim");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"01001000 01101001\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "Hi");
}

#[test]
fn test_presets_require_durable_store() {
    let home = tempfile::tempdir().unwrap();
    let output = run(dnasim(home.path()).args(["presets", "list"]));

    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("SQLite"));
}

#[test]
fn test_preset_lifecycle() {
    let home = tempfile::tempdir().unwrap();
    let db = home.path().join("presets.db");
    let db = db.to_str().unwrap();

    let output = run(dnasim(home.path()).args([
        "--db", db, "presets", "create", "--name", "Greeting", "--text", "Hi", "--json",
    ]));
    assert!(output.status.success());
    let created: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = created["id"].as_i64().unwrap().to_string();
    assert_eq!(created["mappingA"], "00");

    let output = run(dnasim(home.path()).args(["--db", db, "presets", "list"]));
    let listing = stdout(&output);
    assert_eq!(listing.lines().count(), 1);
    assert!(listing.contains("Greeting"));

    let output = run(dnasim(home.path()).args(["--db", db, "presets", "show", &id]));
    assert!(output.status.success());
    assert!(stdout(&output).contains("Sequence: CAGACGGC"));

    let output = run(dnasim(home.path()).args(["--db", db, "presets", "delete", &id]));
    assert!(output.status.success());

    let output = run(dnasim(home.path()).args(["--db", db, "presets", "show", &id]));
    assert_eq!(output.status.code(), Some(3));

    let output = run(dnasim(home.path()).args(["--db", db, "presets", "delete", &id]));
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_preset_create_rejects_bad_mapping() {
    let home = tempfile::tempdir().unwrap();
    let db = home.path().join("presets.db");

    let output = run(dnasim(home.path())
        .env("DNASIM_DATABASE", &db)
        .args(["presets", "create", "--name", "Broken", "--mapping", "A=012"]));
    assert_eq!(output.status.code(), Some(4));

    let output = run(dnasim(home.path())
        .env("DNASIM_DATABASE", &db)
        .args(["presets", "list", "--json"]));
    let presets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(presets, serde_json::json!([]));
}

#[test]
fn test_config_file_selects_sqlite_store() {
    let home = tempfile::tempdir().unwrap();
    let db = home.path().join("from-config.db");
    write_config(
        home.path(),
        &format!(
            "[storage]\nbackend = \"sqlite\"\npath = \"{}\"\n",
            db.to_string_lossy()
        ),
    );

    let output = run(dnasim(home.path()).args(["presets", "create", "--name", "Configured", "-q"]));
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1");
    assert!(db.exists());
}

#[test]
fn test_binary_and_decode_ignore_broken_config() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[storage\nbackend = ");

    let output = run(dnasim(home.path()).args(["binary", "A"]));
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "01000001");

    let output = run(dnasim(home.path()).args(["decode", "01000001"]));
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "A");

    let output = run(dnasim(home.path()).args(["encode", "A"]));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config"));
}
