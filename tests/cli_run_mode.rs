use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn run_writes_json_and_tsv() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("patient.tsv");
    fs::write(&input, "ca153\t28\ncd8\t610\nalbumin\t3.9\n").unwrap();
    let out = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--json")
        .arg("--tsv");
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Input: 3 measured, 44 imputed, panel=full"));
    assert!(stdout.contains("CA 15-3 elevated"));

    assert!(out.join("oncoparam.json").exists());
    assert!(out.join("oncoparam.tsv").exists());
}

#[test]
fn run_with_heuristics_override() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("patient.json");
    fs::write(&input, r#"{"ca153": 18}"#).unwrap();
    let heuristics = tmp.path().join("h.json");
    fs::write(&heuristics, r#"{"rho1_base": 0.6}"#).unwrap();
    let out = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--json")
        .arg("--heuristics")
        .arg(&heuristics);
    cmd.assert().success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("oncoparam.json")).unwrap()).unwrap();
    let rho1 = report["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["key"] == "rho1")
        .unwrap()["value"]
        .as_f64()
        .unwrap();
    assert!((rho1 - 0.75).abs() < 1e-9);
}

#[test]
fn batch_writes_cohort_table() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("cohort.tsv");
    fs::write(
        &input,
        "patient_id\tca153\tcd8\nP1\t20\t700\nP2\t55\t300\nP3\t\t\n",
    )
    .unwrap();
    let out = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("batch")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--threads")
        .arg("2");
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("patients: 3"));

    let table = fs::read_to_string(out.join("cohort.tsv")).unwrap();
    assert_eq!(table.lines().count(), 4);
}

#[test]
fn compare_writes_comparison() {
    let tmp = TempDir::new().unwrap();
    let t1 = tmp.path().join("patient_T1.tsv");
    let t0 = tmp.path().join("patient_T0.tsv");
    fs::write(&t0, "ca153\t48\n").unwrap();
    fs::write(&t1, "ca153\t31\n").unwrap();
    let out = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("compare")
        .arg("--input")
        .arg(&t1)
        .arg("--input")
        .arg(&t0)
        .arg("--out")
        .arg(&out);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("timepoints: patient_T0 -> patient_T1"));
    assert!(stdout.contains("improved=1"));

    assert!(out.join("comparison.json").exists());
    assert!(out.join("patient_T0").join("oncoparam.json").exists());
}

#[test]
fn compare_orders_timepoints_numerically() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("compare");
    for (label, ca153) in [("p_T10", 20.0), ("p_T2", 35.0), ("p_T1", 48.0)] {
        let input = tmp.path().join(format!("{label}.tsv"));
        fs::write(&input, format!("ca153\t{ca153}\n")).unwrap();
        cmd.arg("--input").arg(&input);
    }
    let out = tmp.path().join("out");
    cmd.arg("--out").arg(&out);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("timepoints: p_T1 -> p_T2 -> p_T10"));
    assert!(stdout.contains("p_T1 -> p_T2: improved=1"));
    assert!(stdout.contains("p_T2 -> p_T10: improved=1"));

    let comparison: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("comparison.json")).unwrap()).unwrap();
    assert_eq!(comparison["timepoints"], serde_json::json!(["p_T1", "p_T2", "p_T10"]));
}

#[test]
fn compare_keeps_input_order_without_time_tokens() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("compare");
    for (label, ca153) in [("visit_b", 30.0), ("visit_a_T1", 40.0)] {
        let input = tmp.path().join(format!("{label}.tsv"));
        fs::write(&input, format!("ca153\t{ca153}\n")).unwrap();
        cmd.arg("--input").arg(&input);
    }
    cmd.arg("--out").arg(tmp.path().join("out"));
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("timepoints: visit_b -> visit_a_T1"));
}

#[test]
fn compare_needs_two_inputs() {
    let tmp = TempDir::new().unwrap();
    let t0 = tmp.path().join("a.tsv");
    fs::write(&t0, "ca153\t48\n").unwrap();

    let mut cmd = Command::cargo_bin("kira-oncoparam").unwrap();
    cmd.arg("compare")
        .arg("--input")
        .arg(&t0)
        .arg("--out")
        .arg(tmp.path().join("out"));
    cmd.assert().failure();
}
