use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use kira_oncoparam::OncoError;
use kira_oncoparam::input::{parse_measurements_json, parse_measurements_tsv, read_measurements};
use tempfile::TempDir;

#[test]
fn tsv_with_header_comments_and_blanks() {
    let content = "biomarker\tvalue\n# baseline draw\nca153\t32.5\n\ncd8\t640\nglucose\t\n";
    let set = parse_measurements_tsv(content, "test").unwrap();
    assert_eq!(set.len(), 2);
    assert!((set["ca153"] - 32.5).abs() < 1e-12);
    assert!((set["cd8"] - 640.0).abs() < 1e-12);
    assert!(!set.contains_key("glucose"));
}

#[test]
fn tsv_errors_carry_line_numbers() {
    let err = parse_measurements_tsv("ca153\t1\t2\n", "m.tsv").unwrap_err();
    assert!(matches!(err, OncoError::Parse { line: 1, .. }));

    let err = parse_measurements_tsv("ca153\t1\ncea\tabc\n", "m.tsv").unwrap_err();
    assert!(matches!(err, OncoError::Parse { line: 2, .. }));
    assert!(err.to_string().starts_with("m.tsv:2"));

    let err = parse_measurements_tsv("ca153\t1\nca153\t2\n", "m.tsv").unwrap_err();
    assert!(err.to_string().contains("duplicate biomarker"));

    assert!(parse_measurements_tsv("ca153\tNaN\n", "m.tsv").is_err());
    assert!(parse_measurements_tsv("ca153\tinf\n", "m.tsv").is_err());
}

#[test]
fn oversized_values_are_rejected() {
    let err = parse_measurements_tsv("cea\t1\nctdna\t1.7e308\n", "m.tsv").unwrap_err();
    assert!(matches!(err, OncoError::Parse { line: 2, .. }));
    assert!(err.to_string().contains("in magnitude"));
    assert!(parse_measurements_tsv("ctdna\t-2e12\n", "m.tsv").is_err());

    let set = parse_measurements_tsv("ctdna\t1e12\ncea\t-1e12\n", "m.tsv").unwrap();
    assert_eq!(set.len(), 2);

    assert!(parse_measurements_json(r#"{"ctdna": 1.7e308}"#, "m.json").is_err());
    assert!(parse_measurements_json(r#"{"cea": "1.7e308"}"#, "m.json").is_err());
}

#[test]
fn json_object_values() {
    let content = r#"{"ca153": 28.1, "cd8": "512", "glucose": null, "ldh": ""}"#;
    let set = parse_measurements_json(content, "test").unwrap();
    assert_eq!(set.len(), 2);
    assert!((set["cd8"] - 512.0).abs() < 1e-12);

    assert!(parse_measurements_json("[1, 2]", "test").is_err());
    assert!(parse_measurements_json(r#"{"ca153": true}"#, "test").is_err());
    assert!(parse_measurements_json("{", "test").is_err());
}

#[test]
fn unknown_keys_pass_parsing() {
    let set = parse_measurements_tsv("ca125\t12\n", "test").unwrap();
    assert!(set.contains_key("ca125"));
}

#[test]
fn read_plain_and_gzip_files() {
    let tmp = TempDir::new().unwrap();

    let tsv = tmp.path().join("patient.tsv");
    fs::write(&tsv, "ca153\t20\ncea\t2.1\n").unwrap();
    let set = read_measurements(&tsv).unwrap();
    assert_eq!(set.len(), 2);

    let json = tmp.path().join("patient.json");
    fs::write(&json, r#"{"tk1": 1.4}"#).unwrap();
    let set = read_measurements(&json).unwrap();
    assert!((set["tk1"] - 1.4).abs() < 1e-12);

    let gz = tmp.path().join("patient.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(br#"{"albumin": 3.2, "alt": 31}"#).unwrap();
    fs::write(&gz, encoder.finish().unwrap()).unwrap();
    let set = read_measurements(&gz).unwrap();
    assert_eq!(set.len(), 2);
    assert!((set["albumin"] - 3.2).abs() < 1e-12);

    assert!(read_measurements(&tmp.path().join("missing.tsv")).is_err());
}
