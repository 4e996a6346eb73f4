use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("zcalc").unwrap();
    cmd.env_remove("ZCALC_HISTORY_LIMIT")
        .env_remove("ZCALC_LOG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("zcalc-test-no-config"));
    cmd
}

#[test]
fn eval_plain() {
    cmd()
        .args(["eval", "12+8*2"])
        .assert()
        .success()
        .stdout("28\n");
}

#[test]
fn eval_joins_arguments() {
    cmd()
        .args(["eval", "1", "/", "3"])
        .assert()
        .success()
        .stdout("0.3333\n");
}

#[test]
fn eval_division_by_zero_fails() {
    cmd()
        .args(["eval", "5/0"])
        .assert()
        .failure()
        .stderr(contains("division by zero"));
}

#[test]
fn eval_malformed_fails() {
    cmd()
        .args(["eval", "5+"])
        .assert()
        .failure()
        .stderr(contains("malformed expression"));
}

#[test]
fn eval_json() {
    let output = cmd()
        .args(["--json", "eval", "-5+3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["display"], "-2");
    assert_eq!(value["value"], -2.0);
}

#[test]
fn keys_scenarios() {
    cmd().args(["keys", "12+8="]).assert().success().stdout("20  [C]\n");
    cmd().args(["keys", "5/0="]).assert().success().stdout("Error  [C]\n");
    cmd().args(["keys", "9="]).assert().success().stdout("9  [C]\n");
    cmd()
        .args(["keys", "12+8=+2="])
        .assert()
        .success()
        .stdout("22  [C]\n");
    cmd().args(["keys", "12++8="]).assert().success().stdout("20  [C]\n");
    cmd().args(["keys", "bs"]).assert().success().stdout("0  [AC]\n");
}

#[test]
fn keys_json() {
    cmd()
        .args(["--json", "keys", "12", "+", "8", "="])
        .assert()
        .success()
        .stdout(contains(r#""text":"20""#))
        .stdout(contains(r#""just_evaluated":true"#));
}

#[test]
fn keys_unknown_token_fails() {
    cmd()
        .args(["keys", "12q"])
        .assert()
        .failure()
        .stderr(contains("unknown key 'q'"));
}

#[test]
fn repl_reads_stdin() {
    cmd()
        .arg("repl")
        .write_stdin("7 x 6\n=\n:undo\n:quit\n")
        .assert()
        .success()
        .stdout("0  [AC]\n7×6  [C]\n42  [C]\n7×6  [C]\n");
}

#[test]
fn repl_is_default_command() {
    cmd()
        .write_stdin("1+1=\n")
        .assert()
        .success()
        .stdout(contains("2  [C]"));
}

#[test]
fn config_aliases_are_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[aliases]\nans = \"=\"\nplus = \"+\"").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .args(["keys", "2 plus 2 ans"])
        .assert()
        .success()
        .stdout("4  [C]\n");
}

#[test]
fn missing_config_fails() {
    cmd()
        .args(["--config", "/definitely/not/here.toml", "keys", "1"])
        .assert()
        .failure()
        .stderr(contains("Failed to read config file"));
}
