use std::fs;

use tempfile::TempDir;
use wordfreq_engine::{ensure_parent_dir, ReportWriter};

#[test]
fn creates_missing_parent_dir() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out").join("report.txt");
    let dir = ensure_parent_dir(&target).unwrap();
    assert_eq!(dir, temp.path().join("out"));
    assert!(dir.is_dir());
}

#[test]
fn write_replaces_existing_report() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("report.txt");
    let writer = ReportWriter::new(&target);
    assert_eq!(writer.target(), target.as_path());

    writer.write("first".as_bytes()).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "first");

    writer.write("국회 : 3\n".as_bytes()).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "국회 : 3\n");
}

#[test]
fn no_partial_file_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = ReportWriter::new(file_path.join("report.txt"));
    assert!(writer.write(b"data").is_err());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
