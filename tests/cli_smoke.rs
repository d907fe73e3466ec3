use std::fs;
use std::process::Command;

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_henon-lyapunov").to_string()
}

fn run(args: &[&str]) -> (bool, String, String) {
    let out = Command::new(bin()).args(args).env("NO_COLOR", "1").output().expect("run");
    (
        out.status.success(),
        String::from_utf8_lossy(&out.stdout).to_string(),
        String::from_utf8_lossy(&out.stderr).to_string(),
    )
}

#[test]
fn cli_classifies_exponent_pair() {
    let (ok, stdout, stderr) = run(&["classify", "-1.0", "-2.0"]);
    assert!(ok, "stderr:\n{stderr}");
    assert!(stdout.contains("point attractor (distinct exponents)"));
    assert!(stdout.contains("code 0"));
}

#[test]
fn cli_spectrum_json() {
    let (ok, stdout, stderr) = run(&["spectrum", "--a", "0.2", "--b", "0.3", "--n-init", "2000", "--cutoff", "100", "--json"]);
    assert!(ok, "stderr:\n{stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(v["path"], "PointAttractor");
    assert_eq!(v["code"], 0);
    assert!(v["pair"]["max"].as_f64().unwrap() < 0.0);
}

#[test]
fn cli_spectrum_reports_divergence() {
    let (ok, stdout, stderr) = run(&["spectrum", "--a", "2.0", "--b", "0.3", "--n-init", "500", "--cutoff", "50"]);
    assert!(ok, "stderr:\n{stderr}");
    assert!(stdout.contains("diverged"));
    assert!(stdout.contains("no attractor"));
}

#[test]
fn cli_sweep_line_table() {
    let (ok, stdout, stderr) = run(&["sweep", "--a", "0.2,0.9,2.0", "--b", "0.3", "--n-init", "2000", "--cutoff", "100"]);
    assert!(ok, "stderr:\n{stderr}");
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 4, "stdout:\n{stdout}");
    assert!(rows[0].contains("lya_max"));
    assert!(rows[3].contains("no attractor"));
}

#[test]
fn cli_rejects_bad_cutoff_and_reads_config() {
    let (ok, _stdout, stderr) = run(&["spectrum", "--a", "1.4", "--b", "0.3", "--n-init", "100", "--cutoff", "100"]);
    assert!(!ok);
    assert!(stderr.contains("Invalid run settings"));

    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "[classify]\ntolerance = 1.0\n").unwrap();
    // 0.5 sits inside the widened zero band
    let (ok, stdout, stderr) = run(&["--config", cfg.to_str().unwrap(), "classify", "0.5", "-0.5"]);
    assert!(ok, "stderr:\n{stderr}");
    assert!(stdout.contains("invariant circle"));
}

#[test]
fn cli_start_point_as_comma_pair() {
    let (ok, stdout, stderr) = run(&[
        "spectrum", "--a", "0.2", "--b", "0.3", "--start", "0.1,-0.2", "--n-init", "2000", "--cutoff", "100", "--json",
    ]);
    assert!(ok, "stderr:\n{stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(v["path"], "PointAttractor");

    let (ok, _stdout, stderr) = run(&["spectrum", "--a", "0.2", "--b", "0.3", "--start", "0.1"]);
    assert!(!ok);
    assert!(stderr.contains("exactly two values"));
}
