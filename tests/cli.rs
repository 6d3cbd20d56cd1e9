use std::fs;

use assert_cmd::Command;

fn script(name: &str, source: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("loxrs_cli_{}_{}.lox", std::process::id(), name));
    fs::write(&path, source).expect("write temp script");
    path
}

#[test]
fn runs_a_file_and_exits_zero() {
    let path = script("ok", "print 1 + 2;");

    Command::cargo_bin("loxrs").unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout("3\n")
        .stderr("");

    fs::remove_file(path).ok();
}

#[test]
fn compile_error_exits_65() {
    let path = script("compile_error", "print;");

    Command::cargo_bin("loxrs").unwrap()
        .arg(&path)
        .assert()
        .code(65);

    fs::remove_file(path).ok();
}

#[test]
fn runtime_error_exits_70() {
    let path = script("runtime_error", "print 1 + nil;");

    Command::cargo_bin("loxrs").unwrap()
        .arg(&path)
        .assert()
        .code(70)
        .stderr("Operands must be two numbers or two strings.\n[line 1]\n");

    fs::remove_file(path).ok();
}

#[test]
fn two_arguments_prints_usage_and_exits_64() {
    Command::cargo_bin("loxrs").unwrap()
        .arg("one.lox")
        .arg("two.lox")
        .assert()
        .code(64)
        .stdout("Usage: loxrs [script]\n");
}

#[test]
fn missing_file_exits_74() {
    Command::cargo_bin("loxrs").unwrap()
        .arg("/nonexistent/path/to/a/file/that/does/not/exist.lox")
        .assert()
        .code(74);
}
