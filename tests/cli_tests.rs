use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    instance_path: PathBuf,
    solution_path: PathBuf,
    bad_solution_path: PathBuf,
    config_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let instance_path = dir.path().join("instance.txt");
        let solution_path = dir.path().join("solution.txt");
        let bad_solution_path = dir.path().join("bad_solution.txt");
        let config_path = dir.path().join("config.json");

        // A A A B B B, option 2/3 on A, batch 3
        let mut file = File::create(&instance_path).unwrap();
        writeln!(file, "6 1 2 3 0 0").unwrap();
        writeln!(file, "2 3 1").unwrap();
        writeln!(file, "0 3 1").unwrap();
        writeln!(file, "1 3 0").unwrap();

        let mut file = File::create(&solution_path).unwrap();
        writeln!(file, "0 1 3 2 4 5").unwrap();

        let mut file = File::create(&bad_solution_path).unwrap();
        writeln!(file, "0 1 2 2 4 5").unwrap();

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, r#"{{"eval": {{"paint_batch": 2}}}}"#).unwrap();

        Self {
            _dir: dir,
            instance_path,
            solution_path,
            bad_solution_path,
            config_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_carseq"))
            .args(args)
            .arg("--instance")
            .arg(&self.instance_path)
            .output()
            .expect("Failed to execute carseq")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_evaluate_json() {
    let ctx = TestContext::new();
    let solution = ctx.solution_path.to_str().unwrap();
    let output = ctx.run(&["evaluate", "--solution", solution, "--json"]);
    assert!(output.status.success(), "{:?}", output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["objective"]["color_changes"], 3);
    assert_eq!(report["objective"]["high_violations"], 0);
    assert_eq!(report["objectiveOrder"], "color,high");
    assert_eq!(report["feasibility"]["status"], "feasible");
}

#[test]
fn test_evaluate_table() {
    let ctx = TestContext::new();
    let output = ctx.run(&["evaluate"]);
    assert!(output.status.success(), "{:?}", output);

    let text = stdout(&output);
    assert!(text.contains("Objective order: color,high (code 3)"), "{}", text);
    let color = Regex::new(r"Color changes\s*\|\s*(\d+)").unwrap();
    let high = Regex::new(r"High violations\s*\|\s*(\d+)").unwrap();
    assert_eq!(&color.captures(&text).unwrap()[1], "1");
    assert_eq!(&high.captures(&text).unwrap()[1], "1");
}

#[test]
fn test_validate_exit_codes() {
    let ctx = TestContext::new();
    let output = ctx.run(&["validate"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("FEASIBLE"));

    let output = ctx.run(&["validate", "--paint-batch", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("INFEASIBLE"));

    let bad = ctx.bad_solution_path.to_str().unwrap();
    let output = ctx.run(&["validate", "--solution", bad]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_file_with_cli_override() {
    let ctx = TestContext::new();
    let config = ctx.config_path.to_str().unwrap();

    let output = ctx.run(&["validate", "--config", config]);
    assert_eq!(output.status.code(), Some(1));

    let output = ctx.run(&["validate", "--config", config, "--paint-batch", "3"]);
    assert!(output.status.success());
}

#[test]
fn test_sample_json() {
    let ctx = TestContext::new();
    let output = ctx.run(&[
        "sample", "--samples", "8", "--seed", "7", "--top", "3", "--json",
    ]);
    assert!(output.status.success(), "{:?}", output);

    let ranked: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ranked = ranked.as_array().unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0]["feasibility"]["status"], "feasible");
}
