#![allow(deprecated)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use serde_json::Value;
use uuid::Uuid;

fn workdir() -> PathBuf {
    let root = std::env::temp_dir().join(format!("essay-grader-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

fn grader(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("essay-grader").expect("binary exists");
    cmd.current_dir(dir)
        .env("CLICOLOR", "0")
        .env_remove("ESSAY_MIN_LINES")
        .env_remove("ESSAY_MAX_LINES")
        .env_remove("ESSAY_DICTIONARY")
        .env_remove("ESSAY_OUTPUT_FORMAT");
    cmd
}

fn output(cmd: &mut Command) -> (String, String) {
    let assert = cmd.assert().success();
    let output = assert.get_output().clone();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn grade_reads_essay_file_and_prints_json() {
    let dir = workdir();
    let essay = dir.join("redacao.txt");
    fs::write(&essay, "Portanto, a escola é importante.\nAssim, todos têm acesso.\n")
        .expect("write essay");

    let (stdout, _) = output(
        grader(&dir)
            .arg("grade")
            .arg("--format")
            .arg("json")
            .arg("--min-lines")
            .arg("1")
            .arg("--max-lines")
            .arg("3")
            .arg("-k")
            .arg("Escola, internet")
            .arg(&essay),
    );

    let value: Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(value["lines"]["line_count"], 2);
    assert_eq!(value["lines"]["within_bounds"], true);
    assert_eq!(value["rubric"]["Nota final estimada"], 5.5);
    assert_eq!(value["keywords"]["matched"][0], "Escola");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn grade_reads_stdin_and_prints_text() {
    let dir = workdir();
    let (stdout, _) = output(
        grader(&dir)
            .arg("grade")
            .write_stdin("Portanto, a escola é importante.\n"),
    );

    assert!(stdout.contains("Número de linhas: 1 - Dentro do limite? false"));
    assert!(stdout.contains("Coesão: 2.0"));
    assert!(stdout.trim_end().ends_with("Análise concluída!"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn blank_essay_warns_without_scoring() {
    let dir = workdir();
    let (stdout, stderr) = output(grader(&dir).arg("grade").write_stdin("  \n\t\n"));

    assert!(stdout.is_empty(), "unexpected report: {stdout}");
    assert!(stderr.contains("Digite sua redação para análise."));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn environment_sets_default_format() {
    let dir = workdir();
    let (stdout, _) = output(
        grader(&dir)
            .env("ESSAY_OUTPUT_FORMAT", "json")
            .arg("grade")
            .write_stdin("casa"),
    );

    let value: Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(value["bounds"]["min"], 20);
    assert_eq!(value["bounds"]["max"], 30);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn environment_sets_bounds_and_dictionary() {
    let dir = workdir();
    let dict = dir.join("palavras.txt");
    fs::write(&dict, "gato 3\n").expect("write dictionary");

    let (stdout, _) = output(
        grader(&dir)
            .env("ESSAY_OUTPUT_FORMAT", "json")
            .env("ESSAY_MIN_LINES", "1")
            .env("ESSAY_MAX_LINES", "2")
            .env("ESSAY_DICTIONARY", &dict)
            .arg("grade")
            .write_stdin("gatto"),
    );

    let value: Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(value["bounds"]["min"], 1);
    assert_eq!(value["lines"]["within_bounds"], true);
    assert_eq!(value["corrections"][0]["suggestion"], "gato");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn correct_lists_suggestions() {
    let dir = workdir();
    let (stdout, _) = output(
        grader(&dir)
            .arg("correct")
            .write_stdin("Ele foi derepente para a escolla"),
    );

    assert!(stdout.contains("derepente -> de repente"));
    assert!(stdout.contains("escolla -> escola"));
    assert!(stdout.contains("Erros estimados: 1"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn correct_uses_custom_dictionary() {
    let dir = workdir();
    let dict = dir.join("palavras.txt");
    fs::write(&dict, "gato 3\n").expect("write dictionary");

    let (stdout, _) = output(
        grader(&dir)
            .arg("correct")
            .arg("--dictionary")
            .arg(&dict)
            .write_stdin("gatto"),
    );
    assert!(stdout.contains("gatto -> gato"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_essay_file_fails() {
    let dir = workdir();
    grader(&dir)
        .arg("grade")
        .arg(dir.join("nao-existe.txt"))
        .assert()
        .failure();

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn markers_lists_cohesion_connectors() {
    let dir = workdir();
    let (stdout, _) = output(grader(&dir).arg("markers"));
    assert_eq!(stdout, "portanto\nentretanto\nalém disso\npor outro lado\nassim\n");

    let _ = fs::remove_dir_all(dir);
}
