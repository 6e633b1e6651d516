use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const HSBC_CSV: &str = "\u{FEFF}Transaction date,Posting date,Description,Merchant name,Billing amount
5/3/2024,6/3/2024,STARBUCKS SHANGHAI CHN CN,Starbucks,-50.00
7/3/2024,8/3/2024,PAYMENT THANK YOU,,\"1,000.00\"
9/3/2024,9/3/2024,BROKEN ROW,Nowhere,n/a
";

const BEA_CSV: &str = "交易日期,賬項說明,金額
15/1/2026,百佳超級市場,120.5
16/1/2026,還款,-3000
";

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn qianji(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qianji").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn only_file(dir: &Path) -> PathBuf {
    let entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected one output file, got {entries:?}");
    entries.into_iter().next().unwrap()
}

#[test]
fn test_convert_writes_named_output_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "hsbc.csv", HSBC_CSV);
    let out_dir = dir.path().join("out");

    qianji(dir.path())
        .args(["convert", input.to_str().unwrap(), "--output-dir", out_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"))
        .stdout(predicate::str::contains("2 records"))
        .stdout(predicate::str::contains("1 rows skipped"));

    let written = only_file(&out_dir);
    let name = written.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("hsbc_qianji_output_"), "{name}");
    assert!(name.ends_with(".csv"), "{name}");

    let content = std::fs::read_to_string(&written).unwrap();
    assert!(content.starts_with('\u{FEFF}'));
    let lines: Vec<&str> = content.trim_start_matches('\u{FEFF}').split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("时间,分类,类型,金额"));
    assert_eq!(lines[1], "2024/03/05 00:00,STARBUCKS SHANGHAI,支出,50,Starbucks,,pulse信用卡,,,,,");
}

#[test]
fn test_convert_bea_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "bea.csv", BEA_CSV);
    let output = dir.path().join("custom.csv");

    qianji(dir.path())
        .args([
            "convert",
            input.to_str().unwrap(),
            "--bank",
            "bea",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("BEA credit card"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("2026/01/15 00:00,百佳超級市場,支出,120.5,百佳超級市場,,BEA信用卡"));
    assert!(content.contains("2026/01/16 00:00,還款,收入,3000,還款,,BEA信用卡"));
}

#[test]
fn test_convert_defaults_to_saved_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "bea.csv", BEA_CSV);
    let saved = dir.path().join("saved-out");

    qianji(dir.path())
        .args(["init", "--output-dir", saved.to_str().unwrap()])
        .assert()
        .success();
    let settings_file = dir.path().join(".config/qianji/settings.json");
    let json = std::fs::read_to_string(&settings_file).unwrap();
    assert!(json.contains(&format!("\"output_dir\": \"{}\"", saved.display())), "{json}");

    qianji(dir.path())
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success();

    let written = only_file(&saved);
    assert!(written
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("bea_qianji_output_"));
}

#[test]
fn test_convert_without_settings_uses_documents_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "hsbc.csv", HSBC_CSV);

    qianji(dir.path())
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success();

    only_file(&dir.path().join("Documents").join("qianji"));
}

#[test]
fn test_convert_no_records_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        "empty.csv",
        "Transaction date,Description,Billing amount\nnot a date,X,1\n",
    );
    let out_dir = dir.path().join("out");

    qianji(dir.path())
        .args(["convert", input.to_str().unwrap(), "--output-dir", out_dir.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No convertible records"));
    assert!(!out_dir.exists());
}

#[test]
fn test_convert_unknown_headers_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "other.csv", "Date,Amount\n1/1/2024,5\n");

    qianji(dir.path())
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bank hsbc"));
}

#[test]
fn test_convert_rejects_unknown_bank_key() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "hsbc.csv", HSBC_CSV);

    qianji(dir.path())
        .args(["convert", input.to_str().unwrap(), "--bank", "citi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown bank: citi"));
}

#[test]
fn test_convert_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    qianji(dir.path())
        .args(["convert", dir.path().join("nope.csv").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_detect() {
    let dir = tempfile::tempdir().unwrap();
    let hsbc = write_csv(dir.path(), "hsbc.csv", HSBC_CSV);
    let bea = write_csv(dir.path(), "bea.csv", BEA_CSV);

    qianji(dir.path())
        .args(["detect", hsbc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hsbc"));
    qianji(dir.path())
        .args(["detect", bea.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bea"));
}

#[test]
fn test_preview_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "hsbc.csv", HSBC_CSV);

    qianji(dir.path())
        .args(["preview", input.to_str().unwrap(), "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STARBUCKS SHANGHAI"))
        .stdout(predicate::str::contains("1 of 2 records shown, 1 rows skipped"));
    assert!(!dir.path().join("Documents").exists());
}

#[test]
fn test_banks_lists_formats() {
    let dir = tempfile::tempdir().unwrap();

    qianji(dir.path())
        .arg("banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("hsbc"))
        .stdout(predicate::str::contains("bea"))
        .stdout(predicate::str::contains("Billing amount"))
        .stdout(predicate::str::contains("金額"));
}
