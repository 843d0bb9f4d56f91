//! End-to-end: generate, write to disk, read back.

use casegen_core::{
    case::CaseRecord,
    config::GeneratorConfig,
    error::GenError,
    generator::generate_dataset,
    writer::write_csv_file,
};
use std::{fs, path::PathBuf};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("casegen-{name}-{}.csv", std::process::id()))
}

#[test]
fn five_case_file_has_header_and_five_rows() {
    let path = temp_path("five");
    let cfg = GeneratorConfig {
        output_path: path.to_string_lossy().into_owned(),
        ..GeneratorConfig::default_test()
    };

    let cases = generate_dataset(&cfg).unwrap();
    write_csv_file(&cfg.output_path, &cases).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6, "Expected header + 5 rows, got {}", lines.len());
    assert_eq!(lines[0], CaseRecord::csv_header());

    for (i, line) in lines[1..].iter().enumerate() {
        let cols: Vec<&str> = line.split(',').collect();
        assert_eq!(cols.len(), CaseRecord::COLUMNS.len(), "row {i}: {line}");
        assert_eq!(cols[0], format!("CASE_{}", 1_000_000 + i));
        // Money columns always carry exactly two decimals.
        for money in [cols[1], cols[6], cols[7]] {
            let (_, frac) = money.split_once('.').expect("decimal point");
            assert_eq!(frac.len(), 2, "row {i}: {money}");
        }
        let label: u8 = cols[8].parse().unwrap();
        let loss: f64 = cols[7].parse().unwrap();
        assert_eq!(label == 1, loss > 0.0, "row {i}: label {label} vs loss {loss}");
    }

    fs::remove_file(&path).ok();
}

#[test]
fn rewriting_the_same_run_gives_identical_file() {
    let path_a = temp_path("rewrite-a");
    let path_b = temp_path("rewrite-b");
    let cfg = GeneratorConfig { num_cases: 1_000, ..GeneratorConfig::default_test() };

    write_csv_file(&path_a.to_string_lossy(), &generate_dataset(&cfg).unwrap()).unwrap();
    write_csv_file(&path_b.to_string_lossy(), &generate_dataset(&cfg).unwrap()).unwrap();

    let a = fs::read(&path_a).unwrap();
    let b = fs::read(&path_b).unwrap();
    assert_eq!(a, b);
    assert_eq!(String::from_utf8(a).unwrap().lines().count(), 1_001);

    fs::remove_file(&path_a).ok();
    fs::remove_file(&path_b).ok();
}

#[test]
fn unwritable_path_is_reported_with_the_path() {
    let dir = temp_path("as-dir");
    fs::create_dir_all(&dir).unwrap();
    // A directory cannot be opened as a file for writing.
    let err = write_csv_file(&dir.to_string_lossy(), &[]).unwrap_err();
    match &err {
        GenError::Output { path, .. } => assert_eq!(*path, dir.to_string_lossy().into_owned()),
        other => panic!("expected Output error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Cannot write"));
    fs::remove_dir_all(&dir).ok();
}
