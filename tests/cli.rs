use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

const PHONES: &str = "name,brand,price,rating
iphone 15 pro,apple,999,4.9
galaxy s23 ultra,samsung,1199,4.8
redmi note 12,xiaomi,199,4.6
poco x5 pro,xiaomi,299,4.4
";

fn setup(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}

fn rowquery() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rowquery"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str], file: &PathBuf) -> String {
    let output = rowquery()
        .arg("--file")
        .arg(file)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn prints_whole_file_as_table() {
    let (_dir, path) = setup("phones.csv", PHONES);
    let out = stdout_of(&[], &path);
    assert!(out.starts_with('+'));
    for name in ["iphone 15 pro", "galaxy s23 ultra", "redmi note 12", "poco x5 pro"] {
        assert!(out.contains(name), "{name} missing from:\n{out}");
    }
}

#[test]
fn where_filters_rows() {
    let (_dir, path) = setup("phones.csv", PHONES);
    let out = stdout_of(&["--where", "price>500", "--format", "csv"], &path);
    assert_eq!(
        out,
        "name,brand,price,rating\niphone 15 pro,apple,999,4.9\ngalaxy s23 ultra,samsung,1199,4.8\n"
    );
}

#[test]
fn aggregate_with_where() {
    let (_dir, path) = setup("phones.csv", PHONES);
    let out = stdout_of(&["--where", "brand=xiaomi", "--aggregate", "price=min"], &path);
    assert!(out.contains("| min"));
    assert!(out.contains("| 199.0"));
}

#[test]
fn aggregate_as_json() {
    let (_dir, path) = setup("phones.csv", PHONES);
    let out = stdout_of(&["--aggregate", "price=avg", "-f", "json"], &path);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json output");
    assert_eq!(value["avg"], 674.0);
}

#[test]
fn orderby_wins_over_aggregate() {
    let (_dir, path) = setup("phones.csv", PHONES);
    let out = stdout_of(
        &["--aggregate", "price=avg", "--orderby", "rating=asc", "--format", "csv"],
        &path,
    );
    let names: Vec<&str> = out
        .lines()
        .skip(1)
        .filter(|l| !l.is_empty())
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(names, ["poco x5 pro", "redmi note 12", "galaxy s23 ultra", "iphone 15 pro"]);
}

#[test]
fn json_input_file() {
    let (_dir, path) = setup(
        "phones.json",
        r#"[{"name": "iphone 15 pro", "price": 999}, {"name": "redmi note 12", "price": 199}]"#,
    );
    let out = stdout_of(&["--where", "price<500", "--format", "csv"], &path);
    assert_eq!(out, "name,price\nredmi note 12,199\n");
}

#[test]
fn invalid_expression_is_reported_once() {
    let (_dir, path) = setup("phones.csv", PHONES);
    let output = rowquery()
        .arg("--file")
        .arg(&path)
        .args(["--where", "price!1000"])
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: Invalid where expression 'price!1000'"));
    assert_eq!(stderr.lines().count(), 1);
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = rowquery()
        .arg("--file")
        .arg(dir.path().join("nonexistent.csv"))
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("nonexistent.csv"));
}
